/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hothouse::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hothouse::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Hothouse::Title)
                            .string_len(30)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Hothouse::Yields)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Hothouse::SpentFertilizers)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Hothouse::Crop).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-hothouse-crop")
                            .from(Hothouse::Table, Hothouse::Crop)
                            .to(Crop::Table, Crop::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hothouse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hothouse {
    Table,
    Id,
    Title,
    Yields,
    SpentFertilizers,
    Crop,
}

#[derive(DeriveIden)]
enum Crop {
    Table,
    Id,
}
