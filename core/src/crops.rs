/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    ModelTrait, QueryFilter, TransactionTrait,
};
use entity::hothouse;
use uuid::Uuid;

use super::error::{RecordError, RecordResult};
use super::input::check_title;
use super::permission::require_admin;
use super::repository::{ensure_title_free, require_by_title};
use super::types::*;

fn summarize(crop: MCrop, hothouses: &[MHothouse]) -> CropSummary {
    CropSummary {
        title: crop.title,
        hothouses: hothouses.len() as u64,
        yields: hothouses.iter().map(|h| h.yields).sum(),
        spent_fertilizers: hothouses.iter().map(|h| h.spent_fertilizers).sum(),
    }
}

pub async fn list_crops(db: &DatabaseConnection) -> RecordResult<Vec<CropSummary>> {
    let txn = db.begin().await?;

    let crops = ECrop::find()
        .find_with_related(hothouse::Entity)
        .all(&txn)
        .await?;

    txn.commit().await?;

    let mut summaries: Vec<CropSummary> = crops
        .into_iter()
        .map(|(crop, hothouses)| summarize(crop, &hothouses))
        .collect();
    summaries.sort_by(|a, b| a.title.cmp(&b.title));

    Ok(summaries)
}

pub async fn get_crop(db: &DatabaseConnection, title: &str) -> RecordResult<CropSummary> {
    let txn = db.begin().await?;

    let crop = require_by_title::<ECrop, _>(&txn, title).await?;
    let hothouses = crop.find_related(hothouse::Entity).all(&txn).await?;

    txn.commit().await?;

    Ok(summarize(crop, &hothouses))
}

/// Creates the crop together with its empty schedules.
pub async fn add_crop(db: &DatabaseConnection, actor: Uuid, title: &str) -> RecordResult<MCrop> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    check_title(title).map_err(RecordError::Validation)?;
    ensure_title_free::<ECrop, _>(&txn, title).await?;

    let crop = ACrop {
        id: Set(Uuid::new_v4()),
        title: Set(title.to_string()),
    }
    .insert(&txn)
    .await?;

    ASchedules {
        id: Set(Uuid::new_v4()),
        crop: Set(crop.id),
        sowing_date: Set(None),
        harvest_date: Set(None),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!("Created crop {}", crop.title);

    Ok(crop)
}

/// Renames a crop. An empty or unchanged title leaves it as it is.
pub async fn rename_crop(
    db: &DatabaseConnection,
    actor: Uuid,
    title: &str,
    new_title: &str,
) -> RecordResult<MCrop> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let crop = require_by_title::<ECrop, _>(&txn, title).await?;

    if new_title.is_empty() || new_title == crop.title {
        txn.commit().await?;
        return Ok(crop);
    }

    check_title(new_title).map_err(RecordError::Validation)?;
    ensure_title_free::<ECrop, _>(&txn, new_title).await?;

    let mut acrop: ACrop = crop.into();
    acrop.title = Set(new_title.to_string());
    let crop = acrop.update(&txn).await?;

    txn.commit().await?;
    tracing::info!("Renamed crop {} to {}", title, crop.title);

    Ok(crop)
}

/// Deletes the crop with its schedules. Hothouses growing it are kept with
/// no crop; the number of such hothouses is returned.
pub async fn delete_crop(db: &DatabaseConnection, actor: Uuid, title: &str) -> RecordResult<u64> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let crop = require_by_title::<ECrop, _>(&txn, title).await?;

    let unlinked = EHothouse::update_many()
        .col_expr(CHothouse::Crop, Expr::value(Option::<Uuid>::None))
        .filter(CHothouse::Crop.eq(crop.id))
        .exec(&txn)
        .await?
        .rows_affected;

    let schedules = ESchedules::find()
        .filter(CSchedules::Crop.eq(crop.id))
        .all(&txn)
        .await?;

    for schedule in schedules {
        EFertilizerSchedule::delete_many()
            .filter(CFertilizerSchedule::Schedules.eq(schedule.id))
            .exec(&txn)
            .await?;
        EWateringSchedule::delete_many()
            .filter(CWateringSchedule::Schedules.eq(schedule.id))
            .exec(&txn)
            .await?;
        schedule.delete(&txn).await?;
    }

    crop.delete(&txn).await?;

    txn.commit().await?;
    tracing::info!("Deleted crop {}, unlinked {} hothouses", title, unlinked);

    Ok(unlinked)
}
