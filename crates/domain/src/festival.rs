// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The minimal timing metadata the resolver needs for one festival.
///
/// A descriptor is immutable input: the resolver never mutates it and
/// produces no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FestivalDescriptor {
    /// Event name, matched by case-sensitive substring against the rule table.
    pub event_name: String,
    /// Free-text human description of timing (e.g. "Mid-Mar", "Late Jan–Mar").
    /// Used only by the fallback rule.
    pub general_date: String,
    /// Three/four-letter month abbreviation (e.g. "Jan", "Sept"). Used only
    /// by the fallback rule to pick a target month.
    pub month: String,
}

impl FestivalDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(event_name: String, general_date: String, month: String) -> Self {
        Self {
            event_name,
            general_date,
            month,
        }
    }
}

/// A full catalog record for one festival.
///
/// The timing fields double as the resolver descriptor; the remaining fields
/// are presentation metadata carried from the source dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Festival {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the festival has not been persisted yet.
    pub festival_id: Option<i64>,
    /// Event name (unique within the catalog).
    pub event_name: String,
    /// Month abbreviation for the fallback rule.
    pub month: String,
    /// Free-text timing description for the fallback rule.
    pub general_date: String,
    /// Where the festival takes place.
    pub location: String,
    /// Festival classification (e.g. "Folklore", "Tribal").
    pub festival_type: String,
    /// One-line experience summary.
    pub summary: String,
    /// Hook/intro line from the source dataset.
    pub hook_intro: String,
    /// Optional time-of-day hint.
    pub time_of_day: Option<String>,
    /// Optional latitude, carried as text.
    pub latitude: Option<String>,
    /// Optional longitude, carried as text.
    pub longitude: Option<String>,
    /// Optional content-potential note.
    pub content_potential: Option<String>,
    /// Optional voiceover prompt.
    pub voiceover_prompt: Option<String>,
    /// Optional ideal-titles note.
    pub ideal_titles: Option<String>,
}

impl Festival {
    /// Returns the resolver descriptor for this festival.
    #[must_use]
    pub fn descriptor(&self) -> FestivalDescriptor {
        FestivalDescriptor {
            event_name: self.event_name.clone(),
            general_date: self.general_date.clone(),
            month: self.month.clone(),
        }
    }
}

/// Validates the required fields of a festival record.
///
/// # Errors
///
/// Returns [`DomainError::InvalidEventName`] if the event name is empty or
/// whitespace-only.
pub fn validate_festival_fields(event_name: &str) -> Result<(), DomainError> {
    if event_name.trim().is_empty() {
        return Err(DomainError::InvalidEventName(String::from(
            "Event name must not be empty",
        )));
    }
    Ok(())
}
