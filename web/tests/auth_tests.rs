/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use agronomy_core::types::BaseResponse;
use entity::user_account::Role;
use http::StatusCode;
use http::header::AUTHORIZATION;
use serde_json::json;
use web::endpoints::user::UserResponse;

#[tokio::test]
async fn test_health() {
    let server = common::create_server(&[]).await;

    let response = server.get("/api/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<BaseResponse<String>>().message, "200 ALIVE");

    let response = server.get("/api/unknown").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_and_current_user() {
    let server = common::create_server(&[]).await;

    let token = common::login(&server, "admin", common::ADMIN_PASSWORD).await;

    let response = server
        .get("/api/user")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    response.assert_status_ok();

    let user = response.json::<BaseResponse<UserResponse>>().message;
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, Role::Admin);

    let response = server
        .post("/api/user/logout")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_login_rejected() {
    let server = common::create_server(&[]).await;

    let response = server
        .post("/api/user/login")
        .json(&json!({ "username": "admin", "password": "Wr0ngPass" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body = response.json::<BaseResponse<String>>();
    assert!(body.error);
    assert_eq!(body.message, "Invalid credentials");
}

#[tokio::test]
async fn test_missing_or_invalid_token() {
    let server = common::create_server(&[]).await;

    let response = server.get("/api/hothouses").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/hothouses")
        .add_header(AUTHORIZATION, common::bearer("not-a-token"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register() {
    let server = common::create_server(&[]).await;

    let token = common::register_and_login(&server, "farmer").await;

    let response = server
        .get("/api/user")
        .add_header(AUTHORIZATION, common::bearer(&token))
        .await;
    let user = response.json::<BaseResponse<UserResponse>>().message;
    assert_eq!(user.role, Role::Visitor);

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "farmer", "password": common::VISITOR_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "grower", "password": "short" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_registration_disabled() {
    let server = common::create_server(&["--disable-registration"]).await;

    let response = server
        .post("/api/user/register")
        .json(&json!({ "username": "farmer", "password": common::VISITOR_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<BaseResponse<String>>().message,
        "Registration is disabled"
    );
}

#[tokio::test]
async fn test_change_role() {
    let server = common::create_server(&[]).await;

    let admin = common::login(&server, "admin", common::ADMIN_PASSWORD).await;
    let farmer = common::register_and_login(&server, "farmer").await;

    let response = server
        .patch("/api/user/admin/role")
        .add_header(AUTHORIZATION, common::bearer(&farmer))
        .json(&json!({ "role": "visitor" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = server
        .patch("/api/user/farmer/role")
        .add_header(AUTHORIZATION, common::bearer(&admin))
        .json(&json!({ "role": "admin" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<BaseResponse<UserResponse>>().message.role,
        Role::Admin
    );

    // the existing token picks up the new role
    let response = server
        .put("/api/crops")
        .add_header(AUTHORIZATION, common::bearer(&farmer))
        .json(&json!({ "title": "Tomato" }))
        .await;
    response.assert_status_ok();
}
