/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use agronomy_core::accounts::get_user_with_role;
use agronomy_core::permission::set_role;
use agronomy_core::types::*;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use entity::user_account::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub username: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PatchRoleRequest {
    pub role: Role,
}

/// Current user and role. Clients use the role to show or hide edit
/// controls; every mutation re-checks it.
pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<UserResponse>>> {
    let (user, role) = get_user_with_role(&state.db, user.id).await?;

    let res = BaseResponse {
        error: false,
        message: UserResponse {
            username: user.username,
            role,
        },
    };

    Ok(Json(res))
}

pub async fn patch_role(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(username): Path<String>,
    Json(body): Json<PatchRoleRequest>,
) -> WebResult<Json<BaseResponse<UserResponse>>> {
    let account = set_role(&state.db, user.id, &username, body.role).await?;

    let res = BaseResponse {
        error: false,
        message: UserResponse {
            username,
            role: account.role,
        },
    };

    Ok(Json(res))
}
