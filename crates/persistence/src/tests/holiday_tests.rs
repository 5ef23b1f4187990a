// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for public-holiday persistence operations.

use time::{Date, Month};

use crate::Persistence;

#[test]
fn test_insert_and_list_holidays_ordered_by_date() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    // Inserted out of order
    persistence
        .insert_holiday("IN", 2025, "2025-10-20", "Diwali")
        .unwrap();
    persistence
        .insert_holiday("IN", 2025, "2025-03-14", "Holi")
        .unwrap();

    let holidays = persistence.list_holidays("IN", 2025).unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].name, "Holi");
    assert_eq!(holidays[1].name, "Diwali");
}

#[test]
fn test_list_holidays_is_scoped_to_country_and_year() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .insert_holiday("IN", 2025, "2025-03-14", "Holi")
        .unwrap();
    persistence
        .insert_holiday("IN", 2024, "2024-03-25", "Holi")
        .unwrap();
    persistence
        .insert_holiday("BD", 2025, "2025-01-14", "Shakrain")
        .unwrap();

    let holidays = persistence.list_holidays("IN", 2025).unwrap();
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].date, "2025-03-14");
}

#[test]
fn test_load_holiday_table() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .insert_holiday("IN", 2025, "2025-03-14", "Holi")
        .unwrap();
    persistence
        .insert_holiday("IN", 2025, "2025-10-20", "Diwali")
        .unwrap();

    let table = persistence.load_holiday_table("IN", 2025).unwrap();
    assert_eq!(table.country(), "IN");
    assert_eq!(table.year(), 2025);
    assert_eq!(
        table.first_matching("Holi"),
        Some(Date::from_calendar_date(2025, Month::March, 14).unwrap())
    );
}

#[test]
fn test_clear_holidays() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .insert_holiday("IN", 2025, "2025-03-14", "Holi")
        .unwrap();
    persistence
        .insert_holiday("IN", 2024, "2024-03-25", "Holi")
        .unwrap();

    let cleared = persistence.clear_holidays("IN", 2025).unwrap();
    assert_eq!(cleared, 1);
    assert!(persistence.list_holidays("IN", 2025).unwrap().is_empty());
    assert_eq!(persistence.list_holidays("IN", 2024).unwrap().len(), 1);
}
