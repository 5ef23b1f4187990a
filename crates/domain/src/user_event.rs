// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::DomainError;

/// A calendar event created by a user.
///
/// Events are owner-scoped: every read and write checks `account_id`
/// against the authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the event has not been persisted yet.
    pub event_id: Option<i64>,
    /// The owning account.
    pub account_id: i64,
    /// Event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The calendar date the event falls on.
    pub date: Date,
}

impl UserEvent {
    /// Creates an event that has not been persisted yet.
    #[must_use]
    pub const fn new(account_id: i64, title: String, description: Option<String>, date: Date) -> Self {
        Self {
            event_id: None,
            account_id,
            title,
            description,
            date,
        }
    }

    /// Creates an event record with a known identifier.
    #[must_use]
    pub const fn with_id(
        event_id: i64,
        account_id: i64,
        title: String,
        description: Option<String>,
        date: Date,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            account_id,
            title,
            description,
            date,
        }
    }
}

/// Validates a user-event title.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTitle`] if the title is empty or
/// whitespace-only.
pub fn validate_event_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Event title must not be empty",
        )));
    }
    Ok(())
}
