/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use agronomy_core::types::ServerState;
use axum::routing::{get, patch, post};
use axum::{Router, middleware};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> std::io::Result<Router> {
    let origin = HeaderValue::from_str(&state.cli.serve_url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .route("/api/user", get(endpoints::user::get))
        .route("/api/user/{username}/role", patch(endpoints::user::patch_role))
        .route("/api/user/logout", post(endpoints::auth::post_logout))
        .route(
            "/api/hothouses",
            get(endpoints::hothouses::get).put(endpoints::hothouses::put),
        )
        .route(
            "/api/hothouses/{hothouse}",
            get(endpoints::hothouses::get_hothouse_by_title)
                .patch(endpoints::hothouses::patch_hothouse)
                .delete(endpoints::hothouses::delete_hothouse_by_title),
        )
        .route(
            "/api/hothouses/{hothouse}/works",
            get(endpoints::hothouses::get_hothouse_works)
                .post(endpoints::hothouses::post_hothouse_works),
        )
        .route(
            "/api/crops",
            get(endpoints::crops::get).put(endpoints::crops::put),
        )
        .route(
            "/api/crops/{crop}",
            get(endpoints::crops::get_crop_by_title)
                .patch(endpoints::crops::patch_crop)
                .delete(endpoints::crops::delete_crop_by_title),
        )
        .route(
            "/api/crops/{crop}/schedules",
            get(endpoints::crops::get_crop_schedules)
                .post(endpoints::crops::post_crop_schedules),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/user/login", post(endpoints::auth::post_login))
        .route("/api/user/register", post(endpoints::auth::post_register))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(state)?;

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await
}
