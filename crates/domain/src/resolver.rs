// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The festival date-resolution engine.
//!
//! Maps a [`FestivalDescriptor`] plus a target year plus that year's
//! [`HolidayTable`] to a concrete [`Date`]. Dispatch is an explicit ordered
//! rule list evaluated top to bottom; the first rule whose name fragment is
//! contained in the event name wins. A generic fallback derived from the
//! descriptor's month abbreviation and free-text timing always applies when
//! no named rule matches.
//!
//! The resolver is pure: no state, no I/O, no wall-clock dependency beyond
//! the supplied year.

use time::{Date, Duration, Month, Weekday};

use crate::error::DomainError;
use crate::festival::FestivalDescriptor;
use crate::holiday_table::HolidayTable;

/// One way of computing a festival's date for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The date of the earliest holiday-table entry containing `keyword`.
    HolidayAlias {
        /// Substring searched for in holiday names.
        keyword: &'static str,
    },
    /// A fixed day offset from the earliest entry containing `keyword`.
    ///
    /// The offset is applied without clamping: a result may land a few days
    /// outside the target year (e.g. one day before a Jan 1 holiday).
    HolidayOffset {
        /// Substring searched for in holiday names.
        keyword: &'static str,
        /// Signed day offset from the matched holiday date.
        days: i64,
    },
    /// A fixed calendar date in the target year.
    FixedDate {
        /// Target month.
        month: Month,
        /// Day of month, always valid for `month`.
        day: u8,
    },
    /// The last occurrence of a weekday within a month of the target year.
    LastWeekday {
        /// Target month.
        month: Month,
        /// Target weekday.
        weekday: Weekday,
    },
}

/// The ordered dispatch table: first fragment contained in the event name
/// wins. Offset rules precede the generic holiday aliases so that
/// "Lathmar Holi" and "Mewar Holika Dahan" are not intercepted by the plain
/// "Holi" alias.
const RULES: &[(&str, DateRule)] = &[
    (
        "Lathmar Holi",
        DateRule::HolidayOffset {
            keyword: "Holi",
            days: -7,
        },
    ),
    (
        "Mewar Holika Dahan",
        DateRule::HolidayOffset {
            keyword: "Holi",
            days: -1,
        },
    ),
    (
        "Chhath Puja",
        DateRule::HolidayOffset {
            keyword: "Diwali",
            days: 6,
        },
    ),
    ("Holi", DateRule::HolidayAlias { keyword: "Holi" }),
    ("Diwali", DateRule::HolidayAlias { keyword: "Diwali" }),
    // Fixed approximation for a lunar full-moon date.
    (
        "Buddha Purnima",
        DateRule::FixedDate {
            month: Month::May,
            day: 15,
        },
    ),
    (
        "Vesak",
        DateRule::FixedDate {
            month: Month::May,
            day: 15,
        },
    ),
    (
        "Jallikattu",
        DateRule::FixedDate {
            month: Month::January,
            day: 15,
        },
    ),
    (
        "Rann Utsav",
        DateRule::FixedDate {
            month: Month::November,
            day: 1,
        },
    ),
    (
        "Shakrain Kite Festival",
        DateRule::FixedDate {
            month: Month::January,
            day: 14,
        },
    ),
    (
        "Khajuraho Dance Fest",
        DateRule::FixedDate {
            month: Month::February,
            day: 20,
        },
    ),
    (
        "Hornbill Festival",
        DateRule::FixedDate {
            month: Month::December,
            day: 1,
        },
    ),
    (
        "Tulip Garden",
        DateRule::FixedDate {
            month: Month::April,
            day: 1,
        },
    ),
    (
        "Ziro Music Fest",
        DateRule::LastWeekday {
            month: Month::September,
            weekday: Weekday::Thursday,
        },
    ),
    (
        "Mysuru Dasara",
        DateRule::HolidayAlias {
            keyword: "Dussehra",
        },
    ),
];

/// Resolves a festival descriptor to a concrete date in `year`.
///
/// Evaluates the named rules in declared order; if none matches the event
/// name, derives a date from the descriptor's month abbreviation and
/// free-text timing. The fallback is total, so only holiday-dependent rules
/// can fail.
///
/// # Errors
///
/// Returns [`DomainError::NoMatchingHoliday`] if a matched rule requires a
/// holiday-table keyword that no entry contains, and
/// [`DomainError::DateArithmeticOverflow`] if an offset leaves the
/// representable date range.
pub fn resolve(
    descriptor: &FestivalDescriptor,
    year: i32,
    table: &HolidayTable,
) -> Result<Date, DomainError> {
    for (fragment, rule) in RULES {
        if descriptor.event_name.contains(fragment) {
            return apply_rule(*rule, year, table);
        }
    }
    fallback_date(descriptor, year)
}

fn apply_rule(rule: DateRule, year: i32, table: &HolidayTable) -> Result<Date, DomainError> {
    match rule {
        DateRule::HolidayAlias { keyword } => holiday_lookup(table, keyword),
        DateRule::HolidayOffset { keyword, days } => {
            let base = holiday_lookup(table, keyword)?;
            base.checked_add(Duration::days(days)).ok_or_else(|| {
                DomainError::DateArithmeticOverflow {
                    operation: format!("offsetting {keyword} date by {days} days"),
                }
            })
        }
        DateRule::FixedDate { month, day } => calendar_date(year, month, day),
        DateRule::LastWeekday { month, weekday } => last_weekday_of_month(year, month, weekday),
    }
}

fn holiday_lookup(table: &HolidayTable, keyword: &str) -> Result<Date, DomainError> {
    table
        .first_matching(keyword)
        .ok_or_else(|| DomainError::NoMatchingHoliday {
            keyword: keyword.to_string(),
        })
}

fn calendar_date(year: i32, month: Month, day: u8) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::InvalidDate {
        year,
        month: month as u8,
        day,
    })
}

/// Returns the last occurrence of `weekday` within `month` of `year`.
///
/// Starts from the final calendar day of the month and steps backward to the
/// nearest matching weekday, inclusive.
///
/// # Errors
///
/// Returns [`DomainError::DateArithmeticOverflow`] if `year` is at the edge
/// of the representable range.
pub fn last_weekday_of_month(year: i32, month: Month, weekday: Weekday) -> Result<Date, DomainError> {
    let mut date = (28..=31_u8)
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
        .ok_or(DomainError::InvalidDate {
            year,
            month: month as u8,
            day: 28,
        })?;
    while date.weekday() != weekday {
        date = date
            .previous_day()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("stepping back to the requested weekday"),
            })?;
    }
    Ok(date)
}

/// Maps a month abbreviation to a [`Month`].
///
/// Recognizes the twelve three-letter abbreviations plus the non-standard
/// four-letter "Sept". Unrecognized input maps to January.
#[must_use]
pub fn month_from_abbreviation(abbreviation: &str) -> Month {
    match abbreviation {
        "Jan" => Month::January,
        "Feb" => Month::February,
        "Mar" => Month::March,
        "Apr" => Month::April,
        "May" => Month::May,
        "Jun" => Month::June,
        "Jul" => Month::July,
        "Aug" => Month::August,
        "Sept" => Month::September,
        "Oct" => Month::October,
        "Nov" => Month::November,
        "Dec" => Month::December,
        _ => Month::January,
    }
}

fn fallback_date(descriptor: &FestivalDescriptor, year: i32) -> Result<Date, DomainError> {
    let month = month_from_abbreviation(&descriptor.month);
    let day = if descriptor.general_date.contains("Mid-") {
        15
    } else if descriptor.general_date.contains("Late") {
        25
    } else if descriptor.general_date.contains("Early") {
        5
    } else {
        10
    };
    calendar_date(year, month, day)
}
