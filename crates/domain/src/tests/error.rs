// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::NoMatchingHoliday {
        keyword: String::from("Dussehra"),
    };
    assert_eq!(
        format!("{err}"),
        "No holiday-table entry contains keyword 'Dussehra'"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("offsetting Holi date by -7 days"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while offsetting Holi date by -7 days"
    );

    let err: DomainError = DomainError::InvalidDate {
        year: 2025,
        month: 2,
        day: 30,
    };
    assert_eq!(format!("{err}"), "Invalid calendar date: 2025-02-30");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("garbage"),
        error: String::from("bad input"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date 'garbage': bad input"
    );

    let err: DomainError = DomainError::InvalidEmail(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid email: test");

    let err: DomainError = DomainError::InvalidEventName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid event name: test");

    let err: DomainError = DomainError::InvalidTitle(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid title: test");
}
