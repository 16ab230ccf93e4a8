/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Shared setup for the store tests: a migrated in-memory database.

#![allow(dead_code)]

use agronomy_core::accounts::{register_user, seed_admin, verify_login};
use agronomy_core::types::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "Gr33nhouse";
pub const VISITOR_PASSWORD: &str = "Cucumb3rs";

pub async fn connect() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Seeds the administrator and returns its id.
pub async fn admin(db: &DatabaseConnection) -> Uuid {
    seed_admin(db, "admin", ADMIN_PASSWORD).await.unwrap();

    EUser::find()
        .filter(CUser::Username.eq("admin"))
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .id
}

/// Registers and logs in a visitor, returning its id.
pub async fn visitor(db: &DatabaseConnection, username: &str) -> Uuid {
    register_user(db, username, VISITOR_PASSWORD).await.unwrap();
    let (user, _) = verify_login(db, username, VISITOR_PASSWORD).await.unwrap();
    user.id
}
