/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use agronomy_core::init_state;
use agronomy_core::types::Cli;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let _guard = match (cli.report_errors, &cli.sentry_dsn) {
        (true, Some(dsn)) => Some(sentry::init(dsn.as_str())),
        (true, None) => {
            tracing::warn!("Error reporting enabled without a sentry DSN");
            None
        }
        _ => None,
    };

    let state = init_state(cli).await?;

    web::serve_web(state)
        .await
        .context("Web server stopped")?;

    Ok(())
}
