// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested festival was not found.
    FestivalNotFound(i64),
    /// A festival with this event name already exists.
    DuplicateFestival(String),
    /// The requested user event was not found.
    UserEventNotFound(i64),
    /// The requested account was not found.
    AccountNotFound(String),
    /// An account with this email already exists.
    DuplicateAccount(String),
    /// The requested session was not found.
    SessionNotFound(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::FestivalNotFound(id) => write!(f, "Festival not found: {id}"),
            Self::DuplicateFestival(name) => {
                write!(f, "Festival '{name}' already exists")
            }
            Self::UserEventNotFound(id) => write!(f, "User event not found: {id}"),
            Self::AccountNotFound(msg) => write!(f, "Account not found: {msg}"),
            Self::DuplicateAccount(email) => {
                write!(f, "Account with email '{email}' already exists")
            }
            Self::SessionNotFound(msg) => write!(f, "Session not found: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<folkcal_domain::DomainError> for PersistenceError {
    fn from(err: folkcal_domain::DomainError) -> Self {
        Self::Other(err.to_string())
    }
}
