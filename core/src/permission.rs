/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::user_account::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use super::accounts::ensure_account;
use super::error::{RecordError, RecordResult};
use super::types::*;

/// Role stored for the user. Users without an account are visitors.
pub async fn get_role<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> RecordResult<Role> {
    Ok(EUserAccount::find()
        .filter(CUserAccount::User.eq(user_id))
        .one(conn)
        .await?
        .map(|account| account.role)
        .unwrap_or_default())
}

/// Re-reads the role inside the caller's transaction. Mutating operations
/// call this before touching any record.
pub async fn require_admin<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> RecordResult<()> {
    let role = get_role(conn, user_id).await?;

    if !role.is_admin() {
        tracing::warn!("Rejected modification by non-admin user {}", user_id);
        return Err(RecordError::admin_required());
    }

    Ok(())
}

pub async fn set_role(
    db: &DatabaseConnection,
    actor: Uuid,
    username: &str,
    role: Role,
) -> RecordResult<MUserAccount> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let user = EUser::find()
        .filter(CUser::Username.eq(username))
        .one(&txn)
        .await?
        .ok_or_else(|| RecordError::not_found("User"))?;

    let account = ensure_account(&txn, user.id).await?;

    if account.role == role {
        txn.commit().await?;
        return Ok(account);
    }

    if account.role.is_admin() {
        let admins = EUserAccount::find()
            .filter(CUserAccount::Role.eq(Role::Admin))
            .count(&txn)
            .await?;

        if admins <= 1 {
            return Err(RecordError::Conflict(
                "At least one administrator is required".to_string(),
            ));
        }
    }

    let mut aaccount: AUserAccount = account.into();
    aaccount.role = Set(role);
    let account = aaccount.update(&txn).await?;

    txn.commit().await?;
    tracing::info!("User {} is now {}", username, role);

    Ok(account)
}
