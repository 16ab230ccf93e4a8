/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use agronomy_core::accounts::seed_admin;
use agronomy_core::types::*;
use axum_test::TestServer;
use clap::Parser;
use http::HeaderValue;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

pub const ADMIN_PASSWORD: &str = "Gr33nhouse";
pub const VISITOR_PASSWORD: &str = "Cucumb3rs";

pub fn create_cli(extra: &[&str]) -> Cli {
    let secret = std::env::temp_dir().join(format!("agronomy-jwt-{}", Uuid::new_v4()));
    std::fs::write(&secret, "test-jwt-secret").unwrap();

    let mut args = vec![
        "agronomy-server".to_string(),
        "--database-url".to_string(),
        "sqlite::memory:".to_string(),
        "--jwt-secret-file".to_string(),
        secret.to_string_lossy().to_string(),
    ];
    args.extend(extra.iter().map(|a| a.to_string()));

    Cli::try_parse_from(args).unwrap()
}

pub async fn create_state(extra: &[&str]) -> Arc<ServerState> {
    let cli = create_cli(extra);

    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    seed_admin(&db, "admin", ADMIN_PASSWORD).await.unwrap();

    Arc::new(ServerState { db, cli })
}

pub async fn create_server(extra: &[&str]) -> TestServer {
    let state = create_state(extra).await;
    TestServer::new(web::create_router(state).unwrap()).unwrap()
}

pub async fn login(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/user/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    response.json::<BaseResponse<String>>().message
}

pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    server
        .post("/api/user/register")
        .json(&json!({ "username": username, "password": VISITOR_PASSWORD }))
        .await
        .assert_status_ok();

    login(server, username, VISITOR_PASSWORD).await
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}
