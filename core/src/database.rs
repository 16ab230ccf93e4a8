/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::log::LevelFilter;

use super::accounts::seed_admin;
use super::consts::DEFAULT_ADMIN_PASSWORD;
use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // SQL statements are only logged at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(cli.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_database(&db, cli)
        .await
        .context("Failed to seed database")?;

    Ok(db)
}

/// Creates the configured administrator on an empty database.
pub async fn seed_database(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    let password = match &cli.admin_password_file {
        Some(file) => load_secret(file).context("Failed to read administrator password")?,
        None => {
            tracing::warn!("No administrator password file configured, using the default password");
            DEFAULT_ADMIN_PASSWORD.to_string()
        }
    };

    if seed_admin(db, &cli.admin_username, &password).await? {
        tracing::info!("Seeded administrator {}", cli.admin_username);
    }

    Ok(())
}
