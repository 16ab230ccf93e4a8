/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::user_account::Role;
use sea_orm::ActiveEnum;
use std::str::FromStr;

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("visitor").unwrap(), Role::Visitor);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);

    assert!(Role::from_str("Admin").is_err());
    assert!(Role::from_str("owner").is_err());
}

#[test]
fn test_role_display_round_trip() {
    for role in [Role::Visitor, Role::Admin] {
        assert_eq!(Role::from_str(&role.to_string()).unwrap(), role);
    }
}

#[test]
fn test_role_stored_values() {
    assert_eq!(Role::Visitor.to_value(), 0);
    assert_eq!(Role::Admin.to_value(), 1);
    assert_eq!(Role::try_from_value(&1).unwrap(), Role::Admin);
    assert!(Role::try_from_value(&7).is_err());
}

#[test]
fn test_role_defaults_to_visitor() {
    assert_eq!(Role::default(), Role::Visitor);
    assert!(!Role::default().is_admin());
    assert!(Role::Admin.is_admin());
}

#[test]
fn test_role_serde() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let role: Role = serde_json::from_str("\"visitor\"").unwrap();
    assert_eq!(role, Role::Visitor);
}
