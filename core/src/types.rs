/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, parse_amount, port_in_range};
use chrono::NaiveDate;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Parser, Debug, Clone)]
#[command(name = "Agronomy", display_name = "Agronomy", bin_name = "agronomy-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "AGRONOMY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "AGRONOMY_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "AGRONOMY_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(
        long,
        env = "AGRONOMY_SERVE_URL",
        default_value = "http://127.0.0.1:8000"
    )]
    pub serve_url: String,
    #[arg(long, env = "AGRONOMY_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "AGRONOMY_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "AGRONOMY_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub max_connections: u32,
    #[arg(long, env = "AGRONOMY_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "AGRONOMY_SESSION_HOURS", value_parser = greater_than_zero::<i64>, default_value = "24")]
    pub session_hours: i64,
    #[arg(long, env = "AGRONOMY_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "AGRONOMY_ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,
    #[arg(long, env = "AGRONOMY_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "AGRONOMY_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "AGRONOMY_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

/// Row of the crop list: totals are summed over the crop's hothouses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSummary {
    pub title: String,
    pub hothouses: u64,
    pub yields: f64,
    pub spent_fertilizers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HothouseSummary {
    pub title: String,
    pub crop: Option<String>,
    pub yields: f64,
    pub spent_fertilizers: f64,
}

/// Sowing/harvest dates plus the fertilizer and watering days of one
/// works or schedules record. Entry dates are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub sowing: Option<NaiveDate>,
    pub harvest: Option<NaiveDate>,
    pub fertilizer: Vec<NaiveDate>,
    pub watering: Vec<NaiveDate>,
}

/// Yield or fertilizer amount, either a JSON number or decimal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> Result<f64, String> {
        match self {
            Amount::Number(n) if n.is_finite() => Ok(*n),
            Amount::Number(n) => Err(format!("`{}` is not a finite number", n)),
            Amount::Text(s) => parse_amount(s),
        }
    }
}

/// Requested hothouse edits. Absent fields stay as they are; `crop` is a
/// crop selection (see `input::crop_selection`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HothouseChanges {
    pub title: Option<String>,
    pub crop: Option<String>,
    pub yields: Option<Amount>,
    pub spent_fertilizers: Option<Amount>,
}

/// Submitted calendar. Entry sets replace the stored entries wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarUpdate {
    pub sowing: Option<NaiveDate>,
    pub harvest: Option<NaiveDate>,
    #[serde(default)]
    pub fertilizer: BTreeSet<NaiveDate>,
    #[serde(default)]
    pub watering: BTreeSet<NaiveDate>,
}

impl From<CalendarUpdate> for Calendar {
    fn from(update: CalendarUpdate) -> Self {
        Calendar {
            sowing: update.sowing,
            harvest: update.harvest,
            fertilizer: update.fertilizer.into_iter().collect(),
            watering: update.watering.into_iter().collect(),
        }
    }
}

pub type ECrop = crop::Entity;
pub type EFertilizerSchedule = fertilizer_schedule::Entity;
pub type EFertilizerWork = fertilizer_work::Entity;
pub type EHothouse = hothouse::Entity;
pub type ESchedules = schedules::Entity;
pub type EUser = user::Entity;
pub type EUserAccount = user_account::Entity;
pub type EWateringSchedule = watering_schedule::Entity;
pub type EWateringWork = watering_work::Entity;
pub type EWorks = works::Entity;

pub type MCrop = crop::Model;
pub type MFertilizerSchedule = fertilizer_schedule::Model;
pub type MFertilizerWork = fertilizer_work::Model;
pub type MHothouse = hothouse::Model;
pub type MSchedules = schedules::Model;
pub type MUser = user::Model;
pub type MUserAccount = user_account::Model;
pub type MWateringSchedule = watering_schedule::Model;
pub type MWateringWork = watering_work::Model;
pub type MWorks = works::Model;

pub type ACrop = crop::ActiveModel;
pub type AFertilizerSchedule = fertilizer_schedule::ActiveModel;
pub type AFertilizerWork = fertilizer_work::ActiveModel;
pub type AHothouse = hothouse::ActiveModel;
pub type ASchedules = schedules::ActiveModel;
pub type AUser = user::ActiveModel;
pub type AUserAccount = user_account::ActiveModel;
pub type AWateringSchedule = watering_schedule::ActiveModel;
pub type AWateringWork = watering_work::ActiveModel;
pub type AWorks = works::ActiveModel;

pub type CCrop = crop::Column;
pub type CFertilizerSchedule = fertilizer_schedule::Column;
pub type CFertilizerWork = fertilizer_work::Column;
pub type CHothouse = hothouse::Column;
pub type CSchedules = schedules::Column;
pub type CUser = user::Column;
pub type CUserAccount = user_account::Column;
pub type CWateringSchedule = watering_schedule::Column;
pub type CWateringWork = watering_work::Column;
pub type CWorks = works::Column;
