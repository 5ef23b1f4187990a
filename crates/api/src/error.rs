// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use folkcal_domain::DomainError;
use folkcal_persistence::PersistenceError;

use crate::password_policy::PasswordPolicyError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action } => {
                write!(
                    f,
                    "Unauthorized: '{action}' is only permitted for the owning account"
                )
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Uploaded CSV data could not be parsed.
    InvalidCsvFormat {
        /// A human-readable description of the format problem.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action } => {
                write!(
                    f,
                    "Unauthorized: '{action}' is only permitted for the owning account"
                )
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => {
                write!(f, "Invalid CSV format: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { action } => Self::Unauthorized { action },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NoMatchingHoliday { keyword } => ApiError::ResourceNotFound {
            resource_type: String::from("Holiday"),
            message: format!("No holiday-table entry contains keyword '{keyword}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::InvalidDate { year, month, day } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Invalid calendar date: year {year}, month {month}, day {day}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidEventName(msg) => ApiError::InvalidInput {
            field: String::from("event_name"),
            message: msg,
        },
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Not-found and uniqueness failures map onto the API contract; everything
/// else is an internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::FestivalNotFound(festival_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Festival"),
            message: format!("Festival with ID {festival_id} does not exist"),
        },
        PersistenceError::UserEventNotFound(event_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Event"),
            message: format!("Event with ID {event_id} does not exist"),
        },
        PersistenceError::AccountNotFound(identifier) => ApiError::ResourceNotFound {
            resource_type: String::from("Account"),
            message: format!("Account '{identifier}' does not exist"),
        },
        PersistenceError::DuplicateFestival(event_name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_event_name"),
            message: format!("A festival named '{event_name}' already exists"),
        },
        PersistenceError::DuplicateAccount(email) => ApiError::DomainRuleViolation {
            rule: String::from("unique_email"),
            message: format!("An account with email '{email}' already exists"),
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        _ => ApiError::Internal {
            message: format!("Persistence error: {err}"),
        },
    }
}
