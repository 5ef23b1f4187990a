// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A registered user account.
///
/// The password hash never appears here: hashing and verification live in
/// the persistence layer, next to the table that stores the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Canonical identifier assigned by the database.
    pub account_id: i64,
    /// Login email, unique within the system.
    pub email: String,
}

impl Account {
    /// Creates an account record.
    #[must_use]
    pub const fn new(account_id: i64, email: String) -> Self {
        Self { account_id, email }
    }
}

/// Validates the shape of a login email.
///
/// This is a light structural check (non-empty, one `@` with text on both
/// sides), not RFC 5322 validation.
///
/// # Errors
///
/// Returns [`DomainError::InvalidEmail`] if the email is empty or not of the
/// form `local@domain`.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must not be empty",
        )));
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must contain '@'",
        )));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(DomainError::InvalidEmail(String::from(
            "Email must be of the form local@domain",
        )));
    }
    Ok(())
}
