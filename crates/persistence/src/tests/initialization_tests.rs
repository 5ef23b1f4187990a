// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for database initialization and integrity guarantees.

use crate::Persistence;

#[test]
fn test_in_memory_initialization_succeeds() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    persistence.verify_foreign_key_enforcement().unwrap();
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = Persistence::new_in_memory().unwrap();
    let mut second = Persistence::new_in_memory().unwrap();

    first
        .create_account("isolated@example.com", "password123")
        .unwrap();

    assert!(
        second
            .get_account_by_email("isolated@example.com")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_file_based_initialization_succeeds() {
    let dir = std::env::temp_dir().join(format!("folkcal_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("init_test.sqlite3");

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        persistence.verify_foreign_key_enforcement().unwrap();
        persistence
            .create_account("file@example.com", "password123")
            .unwrap();
    }

    // Reopening the same file sees the persisted data
    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert!(
        reopened
            .get_account_by_email("file@example.com")
            .unwrap()
            .is_some()
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_foreign_keys_reject_orphan_user_events() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let date = time::Date::from_calendar_date(2025, time::Month::June, 1).unwrap();
    let orphan = folkcal_domain::UserEvent::new(9999, String::from("Orphan"), None, date);

    assert!(persistence.create_user_event(&orphan).is_err());
}
