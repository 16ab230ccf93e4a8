/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Reads a secret from a file, dropping surrounding whitespace.
pub fn load_secret(f: &str) -> std::io::Result<String> {
    let s = std::fs::read_to_string(f)?;
    Ok(s.trim().replace(char::from(25), ""))
}

/// Hothouse and crop titles: 1 to 30 ASCII letters, digits or Cyrillic
/// characters.
pub fn check_title(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Title cannot be empty".to_string());
    }

    if s.chars().count() > TITLE_MAX_LENGTH {
        return Err(format!(
            "Title cannot exceed {} characters",
            TITLE_MAX_LENGTH
        ));
    }

    if let Some(c) = s
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !CYRILLIC_RANGE.contains(c))
    {
        return Err(format!(
            "Title can only contain letters and digits, found '{}'",
            c
        ));
    }

    Ok(())
}

/// Parses a yield or fertilizer amount. Any finite decimal is accepted.
pub fn parse_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if !value.is_finite() {
        return Err(format!("`{}` is not a finite number", s));
    }

    Ok(value)
}

/// Maps a crop selection to the selected crop title, `None` meaning the
/// hothouse has no crop.
pub fn crop_selection(selection: Option<&str>) -> Option<&str> {
    match selection.map(str::trim) {
        None | Some("") | Some(NO_CROP_SELECTION) => None,
        Some(title) => Some(title),
    }
}

pub fn check_username(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Username cannot be empty".to_string());
    }

    if s.chars().count() > USERNAME_MAX_LENGTH {
        return Err(format!(
            "Username cannot exceed {} characters",
            USERNAME_MAX_LENGTH
        ));
    }

    if s.contains(|c: char| !c.is_alphanumeric() && !matches!(c, '-' | '_' | '.')) {
        return Err(
            "Username can only contain letters, numbers, dashes, dots and underscores"
                .to_string(),
        );
    }

    Ok(())
}

pub fn validate_password(username: &str, password: &str) -> Result<(), String> {
    let length = password.chars().count();

    if length < *PASSWORD_LENGTH.start() {
        return Err(format!(
            "Password must be at least {} characters long",
            PASSWORD_LENGTH.start()
        ));
    }

    if length > *PASSWORD_LENGTH.end() {
        return Err(format!(
            "Password cannot exceed {} characters",
            PASSWORD_LENGTH.end()
        ));
    }

    if password.eq_ignore_ascii_case(username) {
        return Err("Password cannot be the same as the username".to_string());
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err("Password must contain at least one letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }

    // 3+ identical characters in a row
    if password
        .chars()
        .collect::<Vec<_>>()
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
    {
        return Err("Password cannot contain repeated characters (e.g., 'aaa', '111')".to_string());
    }

    Ok(())
}
