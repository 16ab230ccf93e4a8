/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Lookups shared by the crop and hothouse operations.
//!
//! Every operation opens one transaction with `TransactionTrait::begin`,
//! passes it to these helpers and commits at the end. Returning early with
//! `?` drops the transaction, which rolls it back.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use super::error::{RecordError, RecordResult};
use super::types::*;

/// Entity identified by a unique title.
pub trait TitledEntity: EntityTrait {
    /// Name used in error messages.
    const RESOURCE: &'static str;

    fn title_column() -> Self::Column;
}

impl TitledEntity for ECrop {
    const RESOURCE: &'static str = "Crop";

    fn title_column() -> Self::Column {
        CCrop::Title
    }
}

impl TitledEntity for EHothouse {
    const RESOURCE: &'static str = "Hothouse";

    fn title_column() -> Self::Column {
        CHothouse::Title
    }
}

pub async fn find_by_title<E, C>(conn: &C, title: &str) -> RecordResult<Option<E::Model>>
where
    E: TitledEntity,
    C: ConnectionTrait,
{
    Ok(E::find()
        .filter(E::title_column().eq(title))
        .one(conn)
        .await?)
}

pub async fn require_by_title<E, C>(conn: &C, title: &str) -> RecordResult<E::Model>
where
    E: TitledEntity,
    C: ConnectionTrait,
{
    find_by_title::<E, C>(conn, title)
        .await?
        .ok_or_else(|| RecordError::not_found(E::RESOURCE))
}

/// Uniqueness pre-check run before inserting or renaming.
pub async fn ensure_title_free<E, C>(conn: &C, title: &str) -> RecordResult<()>
where
    E: TitledEntity,
    C: ConnectionTrait,
{
    if find_by_title::<E, C>(conn, title).await?.is_some() {
        return Err(RecordError::already_exists(&format!(
            "{} '{}'",
            E::RESOURCE,
            title
        )));
    }

    Ok(())
}
