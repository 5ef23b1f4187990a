// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{DomainError, format_iso_date, parse_iso_date};

#[test]
fn test_parse_iso_date() {
    let date = parse_iso_date("2025-03-14").unwrap();
    assert_eq!(date, Date::from_calendar_date(2025, Month::March, 14).unwrap());
}

#[test]
fn test_parse_iso_date_rejects_malformed_input() {
    for input in ["2025-3-14", "14-03-2025", "2025-02-30", "not a date", ""] {
        let result = parse_iso_date(input);
        assert!(
            matches!(result, Err(DomainError::DateParseError { .. })),
            "expected parse failure for '{input}'"
        );
    }
}

#[test]
fn test_format_iso_date() {
    let date = Date::from_calendar_date(2024, Month::September, 26).unwrap();
    assert_eq!(format_iso_date(date), "2024-09-26");
}

#[test]
fn test_format_then_parse_round_trips() {
    let date = Date::from_calendar_date(2025, Month::January, 1).unwrap();
    assert_eq!(parse_iso_date(&format_iso_date(date)).unwrap(), date);
}
