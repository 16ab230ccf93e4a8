/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use agronomy_core::calendar::{get_schedules, set_schedules};
use agronomy_core::crops::{add_crop, delete_crop, get_crop, list_crops, rename_crop};
use agronomy_core::types::*;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeCropRequest {
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchCropRequest {
    pub title: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteCropResponse {
    /// Hothouses that were growing the crop and now have none.
    pub unlinked_hothouses: u64,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<CropSummary>>>> {
    let crops = list_crops(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: crops,
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeCropRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let crop = add_crop(&state.db, user.id, &body.title).await?;

    let res = BaseResponse {
        error: false,
        message: crop.title,
    };

    Ok(Json(res))
}

pub async fn get_crop_by_title(
    state: State<Arc<ServerState>>,
    Path(crop): Path<String>,
) -> WebResult<Json<BaseResponse<CropSummary>>> {
    let crop = get_crop(&state.db, &crop).await?;

    let res = BaseResponse {
        error: false,
        message: crop,
    };

    Ok(Json(res))
}

pub async fn patch_crop(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(crop): Path<String>,
    Json(body): Json<PatchCropRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    let new_title = body.title.unwrap_or_default();
    let crop = rename_crop(&state.db, user.id, &crop, &new_title).await?;

    let res = BaseResponse {
        error: false,
        message: crop.title,
    };

    Ok(Json(res))
}

pub async fn delete_crop_by_title(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(crop): Path<String>,
) -> WebResult<Json<BaseResponse<DeleteCropResponse>>> {
    let unlinked_hothouses = delete_crop(&state.db, user.id, &crop).await?;

    let res = BaseResponse {
        error: false,
        message: DeleteCropResponse { unlinked_hothouses },
    };

    Ok(Json(res))
}

pub async fn get_crop_schedules(
    state: State<Arc<ServerState>>,
    Path(crop): Path<String>,
) -> WebResult<Json<BaseResponse<Calendar>>> {
    let schedules = get_schedules(&state.db, &crop).await?;

    let res = BaseResponse {
        error: false,
        message: schedules,
    };

    Ok(Json(res))
}

pub async fn post_crop_schedules(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(crop): Path<String>,
    Json(body): Json<CalendarUpdate>,
) -> WebResult<Json<BaseResponse<Calendar>>> {
    let schedules = set_schedules(&state.db, user.id, &crop, body).await?;

    let res = BaseResponse {
        error: false,
        message: schedules,
    };

    Ok(Json(res))
}
