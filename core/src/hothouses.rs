/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use entity::crop;
use uuid::Uuid;

use super::error::{RecordError, RecordResult};
use super::input::{check_title, crop_selection};
use super::permission::require_admin;
use super::repository::{ensure_title_free, require_by_title};
use super::types::*;

fn summarize(hothouse: MHothouse, crop: Option<MCrop>) -> HothouseSummary {
    HothouseSummary {
        title: hothouse.title,
        crop: crop.map(|c| c.title),
        yields: hothouse.yields,
        spent_fertilizers: hothouse.spent_fertilizers,
    }
}

/// Resolves a crop selection to a crop id. Naming a crop that does not
/// exist is an error, selecting "no crop" yields `None`.
async fn resolve_crop<C: ConnectionTrait>(
    conn: &C,
    selection: Option<&str>,
) -> RecordResult<Option<MCrop>> {
    match crop_selection(selection) {
        Some(title) => Ok(Some(require_by_title::<ECrop, _>(conn, title).await?)),
        None => Ok(None),
    }
}

pub async fn list_hothouses(db: &DatabaseConnection) -> RecordResult<Vec<HothouseSummary>> {
    let txn = db.begin().await?;

    let hothouses = EHothouse::find()
        .find_also_related(crop::Entity)
        .order_by_asc(CHothouse::Title)
        .all(&txn)
        .await?;

    txn.commit().await?;

    Ok(hothouses
        .into_iter()
        .map(|(hothouse, crop)| summarize(hothouse, crop))
        .collect())
}

pub async fn get_hothouse(db: &DatabaseConnection, title: &str) -> RecordResult<HothouseSummary> {
    let txn = db.begin().await?;

    let hothouse = require_by_title::<EHothouse, _>(&txn, title).await?;
    let crop = hothouse.find_related(crop::Entity).one(&txn).await?;

    txn.commit().await?;

    Ok(summarize(hothouse, crop))
}

/// Creates a hothouse with zero yields and fertilizers, its empty works and
/// the optional crop assignment.
pub async fn add_hothouse(
    db: &DatabaseConnection,
    actor: Uuid,
    title: &str,
    crop: Option<&str>,
) -> RecordResult<HothouseSummary> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    check_title(title).map_err(RecordError::Validation)?;
    ensure_title_free::<EHothouse, _>(&txn, title).await?;

    let crop = resolve_crop(&txn, crop).await?;

    let hothouse = AHothouse {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
        yields: Set(0.0),
        spent_fertilizers: Set(0.0),
        crop: Set(crop.as_ref().map(|c| c.id)),
    }
    .insert(&txn)
    .await?;

    AWorks {
        id: Set(Uuid::new_v4()),
        hothouse: Set(hothouse.id),
        sowing_date: Set(None),
        harvest_date: Set(None),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!("Created hothouse {}", hothouse.title);

    Ok(summarize(hothouse, crop))
}

/// Applies the requested edits, writing only the fields whose value
/// differs from the stored one.
pub async fn update_hothouse(
    db: &DatabaseConnection,
    actor: Uuid,
    title: &str,
    changes: HothouseChanges,
) -> RecordResult<HothouseSummary> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let hothouse = require_by_title::<EHothouse, _>(&txn, title).await?;
    let mut crop = hothouse.find_related(crop::Entity).one(&txn).await?;
    let mut ahothouse: AHothouse = hothouse.clone().into();

    if let Some(new_title) = changes
        .title
        .filter(|t| !t.is_empty() && *t != hothouse.title)
    {
        check_title(&new_title).map_err(RecordError::Validation)?;
        ensure_title_free::<EHothouse, _>(&txn, &new_title).await?;
        ahothouse.title = Set(new_title);
    }

    if let Some(yields) = changes.yields {
        let yields = yields.value().map_err(RecordError::Validation)?;

        if yields != hothouse.yields {
            ahothouse.yields = Set(yields);
        }
    }

    if let Some(spent_fertilizers) = changes.spent_fertilizers {
        let spent_fertilizers = spent_fertilizers
            .value()
            .map_err(RecordError::Validation)?;

        if spent_fertilizers != hothouse.spent_fertilizers {
            ahothouse.spent_fertilizers = Set(spent_fertilizers);
        }
    }

    if let Some(selection) = changes.crop {
        let new_crop = resolve_crop(&txn, Some(selection.as_str())).await?;
        let new_crop_id = new_crop.as_ref().map(|c| c.id);

        if new_crop_id != hothouse.crop {
            ahothouse.crop = Set(new_crop_id);
            crop = new_crop;
        }
    }

    let hothouse = if ahothouse.is_changed() {
        ahothouse.update(&txn).await?
    } else {
        hothouse
    };

    txn.commit().await?;
    tracing::info!("Updated hothouse {}", hothouse.title);

    Ok(summarize(hothouse, crop))
}

/// Deletes the hothouse with its works and work entries. Its crop is kept.
pub async fn delete_hothouse(db: &DatabaseConnection, actor: Uuid, title: &str) -> RecordResult<()> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let hothouse = require_by_title::<EHothouse, _>(&txn, title).await?;

    let works = EWorks::find()
        .filter(CWorks::Hothouse.eq(hothouse.id))
        .all(&txn)
        .await?;

    for work in works {
        EFertilizerWork::delete_many()
            .filter(CFertilizerWork::Works.eq(work.id))
            .exec(&txn)
            .await?;
        EWateringWork::delete_many()
            .filter(CWateringWork::Works.eq(work.id))
            .exec(&txn)
            .await?;
        work.delete(&txn).await?;
    }

    hothouse.delete(&txn).await?;

    txn.commit().await?;
    tracing::info!("Deleted hothouse {}", title);

    Ok(())
}
