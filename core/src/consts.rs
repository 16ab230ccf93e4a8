/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const TITLE_MAX_LENGTH: usize = 30;
pub const USERNAME_MAX_LENGTH: usize = 64;
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=128;

/// Cyrillic block accepted in titles next to ASCII letters and digits.
pub const CYRILLIC_RANGE: RangeInclusive<char> = '\u{0400}'..='\u{04ff}';

/// Crop selection meaning "no crop", as offered by the selection list.
pub const NO_CROP_SELECTION: &str = "не выбрано";

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";
