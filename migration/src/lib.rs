/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_user;
mod m20260301_000002_create_table_user_account;
mod m20260301_000003_create_table_crop;
mod m20260301_000004_create_table_schedules;
mod m20260301_000005_create_table_schedule_entries;
mod m20260301_000006_create_table_hothouse;
mod m20260301_000007_create_table_works;
mod m20260301_000008_create_table_work_entries;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_user::Migration),
            Box::new(m20260301_000002_create_table_user_account::Migration),
            Box::new(m20260301_000003_create_table_crop::Migration),
            Box::new(m20260301_000004_create_table_schedules::Migration),
            Box::new(m20260301_000005_create_table_schedule_entries::Migration),
            Box::new(m20260301_000006_create_table_hothouse::Migration),
            Box::new(m20260301_000007_create_table_works::Migration),
            Box::new(m20260301_000008_create_table_work_entries::Migration),
        ]
    }
}
