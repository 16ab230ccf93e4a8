/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Unauthenticated(String),
    #[error("Database error: {0}")]
    Database(#[source] DbErr),
}

pub type RecordResult<T> = Result<T, RecordError>;

/// Unique index violations are reported as conflicts.
impl From<DbErr> for RecordError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                RecordError::already_exists("Record")
            }
            _ => RecordError::Database(err),
        }
    }
}

impl RecordError {
    pub fn already_exists(resource: &str) -> Self {
        RecordError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        RecordError::NotFound(format!("{} not found", resource))
    }

    pub fn admin_required() -> Self {
        RecordError::Forbidden("Administrator role required".to_string())
    }

    pub fn invalid_credentials() -> Self {
        RecordError::Unauthenticated("Invalid credentials".to_string())
    }
}
