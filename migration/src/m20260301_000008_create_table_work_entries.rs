/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn entry_table<T: Iden + Copy + 'static>(
    table: T,
    id: T,
    date: T,
    owner: T,
    fk: &str,
) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(id).uuid().not_null().primary_key())
        .col(ColumnDef::new(owner).uuid().not_null())
        .col(ColumnDef::new(date).date().not_null())
        .foreign_key(
            ForeignKey::create()
                .name(fk)
                .from(table, owner)
                .to(Works::Table, Works::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(entry_table(
                FertilizerWork::Table,
                FertilizerWork::Id,
                FertilizerWork::Date,
                FertilizerWork::Works,
                "fk-fertilizer_work-works",
            ))
            .await?;

        manager
            .create_table(entry_table(
                WateringWork::Table,
                WateringWork::Id,
                WateringWork::Date,
                WateringWork::Works,
                "fk-watering_work-works",
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WateringWork::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FertilizerWork::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum FertilizerWork {
    Table,
    Id,
    Works,
    Date,
}

#[derive(DeriveIden, Clone, Copy)]
enum WateringWork {
    Table,
    Id,
    Works,
    Date,
}

#[derive(DeriveIden)]
enum Works {
    Table,
    Id,
}
