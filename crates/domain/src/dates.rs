// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO 8601 date parsing and formatting helpers.
//!
//! Dates cross the persistence and HTTP boundaries as `YYYY-MM-DD` strings;
//! these helpers are the single place that format is defined.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::DomainError;

/// The `YYYY-MM-DD` format used for all stored and transmitted dates.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` string into a [`Date`].
///
/// # Errors
///
/// Returns [`DomainError::DateParseError`] if the string is not a valid
/// calendar date in that format.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a [`Date`] as a `YYYY-MM-DD` string.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE)
        .unwrap_or_else(|_| format!("{date}"))
}
