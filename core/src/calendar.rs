/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Works (what was done in a hothouse) and schedules (what is planned for
//! a crop). Both hold sowing and harvest dates plus fertilizer and
//! watering days.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use super::error::RecordResult;
use super::permission::require_admin;
use super::repository::require_by_title;
use super::types::*;

async fn find_works<C: ConnectionTrait>(conn: &C, hothouse: Uuid) -> RecordResult<Option<MWorks>> {
    Ok(EWorks::find()
        .filter(CWorks::Hothouse.eq(hothouse))
        .one(conn)
        .await?)
}

async fn find_schedules<C: ConnectionTrait>(
    conn: &C,
    crop: Uuid,
) -> RecordResult<Option<MSchedules>> {
    Ok(ESchedules::find()
        .filter(CSchedules::Crop.eq(crop))
        .one(conn)
        .await?)
}

async fn works_calendar<C: ConnectionTrait>(conn: &C, works: MWorks) -> RecordResult<Calendar> {
    let fertilizer = EFertilizerWork::find()
        .filter(CFertilizerWork::Works.eq(works.id))
        .order_by_asc(CFertilizerWork::Date)
        .all(conn)
        .await?
        .into_iter()
        .map(|e| e.date)
        .collect();

    let watering = EWateringWork::find()
        .filter(CWateringWork::Works.eq(works.id))
        .order_by_asc(CWateringWork::Date)
        .all(conn)
        .await?
        .into_iter()
        .map(|e| e.date)
        .collect();

    Ok(Calendar {
        sowing: works.sowing_date,
        harvest: works.harvest_date,
        fertilizer,
        watering,
    })
}

async fn schedules_calendar<C: ConnectionTrait>(
    conn: &C,
    schedules: MSchedules,
) -> RecordResult<Calendar> {
    let fertilizer = EFertilizerSchedule::find()
        .filter(CFertilizerSchedule::Schedules.eq(schedules.id))
        .order_by_asc(CFertilizerSchedule::Date)
        .all(conn)
        .await?
        .into_iter()
        .map(|e| e.date)
        .collect();

    let watering = EWateringSchedule::find()
        .filter(CWateringSchedule::Schedules.eq(schedules.id))
        .order_by_asc(CWateringSchedule::Date)
        .all(conn)
        .await?
        .into_iter()
        .map(|e| e.date)
        .collect();

    Ok(Calendar {
        sowing: schedules.sowing_date,
        harvest: schedules.harvest_date,
        fertilizer,
        watering,
    })
}

/// Works of the hothouse. A hothouse without a works row reads as empty.
pub async fn get_works(db: &DatabaseConnection, hothouse_title: &str) -> RecordResult<Calendar> {
    let txn = db.begin().await?;

    let hothouse = require_by_title::<EHothouse, _>(&txn, hothouse_title).await?;
    let calendar = match find_works(&txn, hothouse.id).await? {
        Some(works) => works_calendar(&txn, works).await?,
        None => Calendar::default(),
    };

    txn.commit().await?;
    Ok(calendar)
}

pub async fn get_schedules(db: &DatabaseConnection, crop_title: &str) -> RecordResult<Calendar> {
    let txn = db.begin().await?;

    let crop = require_by_title::<ECrop, _>(&txn, crop_title).await?;
    let calendar = match find_schedules(&txn, crop.id).await? {
        Some(schedules) => schedules_calendar(&txn, schedules).await?,
        None => Calendar::default(),
    };

    txn.commit().await?;
    Ok(calendar)
}

fn entry_ids(dates: &BTreeSet<NaiveDate>) -> impl Iterator<Item = (Uuid, NaiveDate)> + '_ {
    dates.iter().map(|date| (Uuid::new_v4(), *date))
}

/// Stores the submitted works. Fertilizer and watering days replace the
/// stored ones.
pub async fn set_works(
    db: &DatabaseConnection,
    actor: Uuid,
    hothouse_title: &str,
    update: CalendarUpdate,
) -> RecordResult<Calendar> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let hothouse = require_by_title::<EHothouse, _>(&txn, hothouse_title).await?;

    let works = match find_works(&txn, hothouse.id).await? {
        Some(works) => works,
        None => {
            tracing::debug!("Creating missing works for hothouse {}", hothouse.title);
            AWorks {
                id: Set(Uuid::new_v4()),
                hothouse: Set(hothouse.id),
                sowing_date: Set(None),
                harvest_date: Set(None),
            }
            .insert(&txn)
            .await?
        }
    };

    let works_id = works.id;
    let mut aworks: AWorks = works.clone().into();

    if works.sowing_date != update.sowing {
        aworks.sowing_date = Set(update.sowing);
    }

    if works.harvest_date != update.harvest {
        aworks.harvest_date = Set(update.harvest);
    }

    if aworks.is_changed() {
        aworks.update(&txn).await?;
    }

    EFertilizerWork::delete_many()
        .filter(CFertilizerWork::Works.eq(works_id))
        .exec(&txn)
        .await?;
    EWateringWork::delete_many()
        .filter(CWateringWork::Works.eq(works_id))
        .exec(&txn)
        .await?;

    if !update.fertilizer.is_empty() {
        EFertilizerWork::insert_many(entry_ids(&update.fertilizer).map(|(id, date)| {
            AFertilizerWork {
                id: Set(id),
                works: Set(works_id),
                date: Set(date),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    if !update.watering.is_empty() {
        EWateringWork::insert_many(entry_ids(&update.watering).map(|(id, date)| AWateringWork {
            id: Set(id),
            works: Set(works_id),
            date: Set(date),
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;
    tracing::info!("Updated works of hothouse {}", hothouse.title);

    Ok(Calendar::from(update))
}

/// Stores the submitted schedules. Fertilizer and watering days replace
/// the stored ones.
pub async fn set_schedules(
    db: &DatabaseConnection,
    actor: Uuid,
    crop_title: &str,
    update: CalendarUpdate,
) -> RecordResult<Calendar> {
    let txn = db.begin().await?;
    require_admin(&txn, actor).await?;

    let crop = require_by_title::<ECrop, _>(&txn, crop_title).await?;

    let schedules = match find_schedules(&txn, crop.id).await? {
        Some(schedules) => schedules,
        None => {
            tracing::debug!("Creating missing schedules for crop {}", crop.title);
            ASchedules {
                id: Set(Uuid::new_v4()),
                crop: Set(crop.id),
                sowing_date: Set(None),
                harvest_date: Set(None),
            }
            .insert(&txn)
            .await?
        }
    };

    let schedules_id = schedules.id;
    let mut aschedules: ASchedules = schedules.clone().into();

    if schedules.sowing_date != update.sowing {
        aschedules.sowing_date = Set(update.sowing);
    }

    if schedules.harvest_date != update.harvest {
        aschedules.harvest_date = Set(update.harvest);
    }

    if aschedules.is_changed() {
        aschedules.update(&txn).await?;
    }

    EFertilizerSchedule::delete_many()
        .filter(CFertilizerSchedule::Schedules.eq(schedules_id))
        .exec(&txn)
        .await?;
    EWateringSchedule::delete_many()
        .filter(CWateringSchedule::Schedules.eq(schedules_id))
        .exec(&txn)
        .await?;

    if !update.fertilizer.is_empty() {
        EFertilizerSchedule::insert_many(entry_ids(&update.fertilizer).map(|(id, date)| {
            AFertilizerSchedule {
                id: Set(id),
                schedules: Set(schedules_id),
                date: Set(date),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    if !update.watering.is_empty() {
        EWateringSchedule::insert_many(entry_ids(&update.watering).map(|(id, date)| {
            AWateringSchedule {
                id: Set(id),
                schedules: Set(schedules_id),
                date: Set(date),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;
    tracing::info!("Updated schedules of crop {}", crop.title);

    Ok(Calendar::from(update))
}
