/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod accounts;
pub mod calendar;
pub mod consts;
pub mod crops;
pub mod database;
pub mod error;
pub mod hothouses;
pub mod input;
pub mod permission;
pub mod repository;
pub mod types;

use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> anyhow::Result<Arc<ServerState>> {
    tracing::info!("Starting Agronomy Server on {}:{}", cli.ip, cli.port);

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli }))
}
