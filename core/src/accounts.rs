/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use entity::user_account::Role;
use password_auth::{generate_hash, verify_password};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use super::error::{RecordError, RecordResult};
use super::input::{check_username, validate_password};
use super::types::*;

/// Returns the user's account, creating a visitor account on first use.
pub async fn ensure_account<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
) -> RecordResult<MUserAccount> {
    let account = EUserAccount::find()
        .filter(CUserAccount::User.eq(user_id))
        .one(conn)
        .await?;

    if let Some(account) = account {
        return Ok(account);
    }

    let account = AUserAccount {
        id: Set(Uuid::new_v4()),
        user: Set(user_id),
        role: Set(Role::Visitor),
    }
    .insert(conn)
    .await?;

    tracing::info!("Provisioned visitor account for user {}", user_id);
    Ok(account)
}

pub async fn register_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> RecordResult<MUser> {
    check_username(username).map_err(RecordError::Validation)?;
    validate_password(username, password).map_err(RecordError::Validation)?;

    let txn = db.begin().await?;

    let existing = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&txn)
        .await?;

    if existing.is_some() {
        return Err(RecordError::already_exists("User"));
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password: Set(generate_hash(password)),
        last_login_at: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!("Registered user {} ({})", user.id, user.username);

    Ok(user)
}

/// Checks the credentials and records the login. The account is created
/// here when the user logs in for the first time.
pub async fn verify_login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> RecordResult<(MUser, MUserAccount)> {
    let txn = db.begin().await?;

    let user = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&txn)
        .await?
        .ok_or_else(RecordError::invalid_credentials)?;

    verify_password(password, &user.password).map_err(|_| RecordError::invalid_credentials())?;

    let mut auser: AUser = user.into();
    auser.last_login_at = Set(Some(Utc::now().naive_utc()));
    let user = auser.update(&txn).await?;

    let account = ensure_account(&txn, user.id).await?;

    txn.commit().await?;
    tracing::info!("User {} ({}) logged in.", user.id, user.username);

    Ok((user, account))
}

pub async fn get_user_with_role(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> RecordResult<(MUser, Role)> {
    let user = EUser::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| RecordError::not_found("User"))?;

    let role = super::permission::get_role(db, user_id).await?;

    Ok((user, role))
}

/// Creates the administrator unless a user with that name already exists.
/// Returns whether an account was created.
pub async fn seed_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> RecordResult<bool> {
    let txn = db.begin().await?;

    let existing = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&txn)
        .await?;

    if existing.is_some() {
        tracing::info!("Administrator {} already exists", username);
        return Ok(false);
    }

    let user = AUser {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password: Set(generate_hash(password)),
        last_login_at: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    }
    .insert(&txn)
    .await?;

    AUserAccount {
        id: Set(Uuid::new_v4()),
        user: Set(user.id),
        role: Set(Role::Admin),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!("Created administrator {}", username);

    Ok(true)
}
