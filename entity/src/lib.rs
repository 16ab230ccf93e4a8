/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod crop;
pub mod fertilizer_schedule;
pub mod fertilizer_work;
pub mod hothouse;
pub mod schedules;
pub mod user;
pub mod user_account;
pub mod watering_schedule;
pub mod watering_work;
pub mod works;
