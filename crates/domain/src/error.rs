// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and date resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A holiday-dependent rule found no table entry containing its keyword.
    NoMatchingHoliday {
        /// The keyword that was searched for (e.g. "Holi", "Dussehra").
        keyword: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A (year, month, day) combination does not form a valid calendar date.
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u8,
        /// The day component.
        day: u8,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Account email is empty or malformed.
    InvalidEmail(String),
    /// Festival event name is empty or invalid.
    InvalidEventName(String),
    /// User event title is empty or invalid.
    InvalidTitle(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatchingHoliday { keyword } => {
                write!(f, "No holiday-table entry contains keyword '{keyword}'")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidDate { year, month, day } => {
                write!(f, "Invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidEventName(msg) => write!(f, "Invalid event name: {msg}"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
