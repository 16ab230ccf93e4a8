/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dates of the work actually carried out in one hothouse.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "works")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub hothouse: Uuid,
    pub sowing_date: Option<NaiveDate>,
    pub harvest_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hothouse::Entity",
        from = "Column::Hothouse",
        to = "super::hothouse::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hothouse,
    #[sea_orm(has_many = "super::fertilizer_work::Entity")]
    FertilizerWork,
    #[sea_orm(has_many = "super::watering_work::Entity")]
    WateringWork,
}

impl Related<super::hothouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hothouse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
