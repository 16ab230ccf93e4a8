/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use agronomy_core::calendar::{get_works, set_works};
use agronomy_core::hothouses::{
    add_hothouse, delete_hothouse, get_hothouse, list_hothouses, update_hothouse,
};
use agronomy_core::types::*;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeHothouseRequest {
    pub title: String,
    pub crop: Option<String>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
) -> WebResult<Json<BaseResponse<Vec<HothouseSummary>>>> {
    let hothouses = list_hothouses(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: hothouses,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeHothouseRequest>,
) -> WebResult<Json<BaseResponse<HothouseSummary>>> {
    let hothouse = add_hothouse(&state.db, user.id, &body.title, body.crop.as_deref()).await?;

    let res = BaseResponse {
        error: false,
        message: hothouse,
    };

    Ok(Json(res))
}

pub async fn get_hothouse_by_title(
    state: State<Arc<ServerState>>,
    Path(hothouse): Path<String>,
) -> WebResult<Json<BaseResponse<HothouseSummary>>> {
    let hothouse = get_hothouse(&state.db, &hothouse).await?;

    let res = BaseResponse {
        error: false,
        message: hothouse,
    };

    Ok(Json(res))
}

pub async fn patch_hothouse(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(hothouse): Path<String>,
    Json(body): Json<HothouseChanges>,
) -> WebResult<Json<BaseResponse<HothouseSummary>>> {
    let hothouse = update_hothouse(&state.db, user.id, &hothouse, body).await?;

    let res = BaseResponse {
        error: false,
        message: hothouse,
    };

    Ok(Json(res))
}

pub async fn delete_hothouse_by_title(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(hothouse): Path<String>,
) -> WebResult<Json<BaseResponse<String>>> {
    delete_hothouse(&state.db, user.id, &hothouse).await?;

    let res = BaseResponse {
        error: false,
        message: "Hothouse deleted".to_string(),
    };

    Ok(Json(res))
}

pub async fn get_hothouse_works(
    state: State<Arc<ServerState>>,
    Path(hothouse): Path<String>,
) -> WebResult<Json<BaseResponse<Calendar>>> {
    let works = get_works(&state.db, &hothouse).await?;

    let res = BaseResponse {
        error: false,
        message: works,
    };

    Ok(Json(res))
}

pub async fn post_hothouse_works(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(hothouse): Path<String>,
    Json(body): Json<CalendarUpdate>,
) -> WebResult<Json<BaseResponse<Calendar>>> {
    let works = set_works(&state.db, user.id, &hothouse, body).await?;

    let res = BaseResponse {
        error: false,
        message: works,
    };

    Ok(Json(res))
}
