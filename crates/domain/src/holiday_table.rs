// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// One public-holiday observance: a calendar date and its official name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The observed date.
    pub date: Date,
    /// Official holiday name, matched by case-sensitive substring.
    pub name: String,
}

impl HolidayEntry {
    /// Creates a new holiday entry.
    #[must_use]
    pub const fn new(date: Date, name: String) -> Self {
        Self { date, name }
    }
}

/// The public-holiday table for one `(country, year)` pair.
///
/// Entries are sorted chronologically at construction, so "first entry whose
/// name contains a keyword" is always the earliest such observance in the
/// year, independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayTable {
    country: String,
    year: i32,
    entries: Vec<HolidayEntry>,
}

impl HolidayTable {
    /// Builds a table from unordered entries, sorting them by date.
    ///
    /// Entries sharing a date keep their relative order, which does not
    /// affect keyword lookup semantics.
    #[must_use]
    pub fn new(country: String, year: i32, mut entries: Vec<HolidayEntry>) -> Self {
        entries.sort_by_key(|entry| entry.date);
        Self {
            country,
            year,
            entries,
        }
    }

    /// Builds an empty table, for callers with no holiday data.
    #[must_use]
    pub const fn empty(country: String, year: i32) -> Self {
        Self {
            country,
            year,
            entries: Vec::new(),
        }
    }

    /// The country code this table covers.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The year this table covers.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The chronologically ordered entries.
    #[must_use]
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    /// Returns the date of the earliest entry whose name contains `keyword`.
    ///
    /// Matching is a case-sensitive substring test, so "Holi" matches both
    /// "Holi" and "Holika Dahan".
    #[must_use]
    pub fn first_matching(&self, keyword: &str) -> Option<Date> {
        self.entries
            .iter()
            .find(|entry| entry.name.contains(keyword))
            .map(|entry| entry.date)
    }
}
