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
                    .table(Works::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Works::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Works::Hothouse)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Works::SowingDate).date())
                    .col(ColumnDef::new(Works::HarvestDate).date())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-works-hothouse")
                            .from(Works::Table, Works::Hothouse)
                            .to(Hothouse::Table, Hothouse::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Works {
    Table,
    Id,
    Hothouse,
    SowingDate,
    HarvestDate,
}

#[derive(DeriveIden)]
enum Hothouse {
    Table,
    Id,
}
