// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for user event persistence operations.

use folkcal_domain::UserEvent;
use time::{Date, Month};

use crate::{Persistence, PersistenceError};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

fn create_test_account(persistence: &mut Persistence) -> i64 {
    persistence
        .create_account("user@example.com", "password123")
        .unwrap()
}

#[test]
fn test_create_and_get_user_event() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account_id = create_test_account(&mut persistence);

    let event = UserEvent::new(
        account_id,
        String::from("Dentist"),
        Some(String::from("Annual checkup")),
        date(2025, Month::June, 15),
    );
    let event_id = persistence.create_user_event(&event).unwrap();

    let stored = persistence.get_user_event(event_id).unwrap().unwrap();
    assert_eq!(stored.event_id, Some(event_id));
    assert_eq!(stored.account_id, account_id);
    assert_eq!(stored.title, "Dentist");
    assert_eq!(stored.description.as_deref(), Some("Annual checkup"));
    assert_eq!(stored.date, date(2025, Month::June, 15));
}

#[test]
fn test_list_events_for_year_filters_and_orders() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account_id = create_test_account(&mut persistence);

    for (title, event_date) in [
        ("December event", date(2025, Month::December, 31)),
        ("January event", date(2025, Month::January, 1)),
        ("Next year", date(2026, Month::March, 1)),
        ("Previous year", date(2024, Month::March, 1)),
    ] {
        persistence
            .create_user_event(&UserEvent::new(
                account_id,
                String::from(title),
                None,
                event_date,
            ))
            .unwrap();
    }

    let events = persistence.list_events_for_year(account_id, 2025).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "January event");
    assert_eq!(events[1].title, "December event");
}

#[test]
fn test_list_events_is_scoped_to_the_account() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let first = create_test_account(&mut persistence);
    let second = persistence
        .create_account("other@example.com", "password123")
        .unwrap();

    persistence
        .create_user_event(&UserEvent::new(
            first,
            String::from("Mine"),
            None,
            date(2025, Month::May, 5),
        ))
        .unwrap();

    assert!(persistence.list_events_for_year(second, 2025).unwrap().is_empty());
}

#[test]
fn test_update_user_event() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account_id = create_test_account(&mut persistence);

    let event_id = persistence
        .create_user_event(&UserEvent::new(
            account_id,
            String::from("Dentist"),
            None,
            date(2025, Month::June, 15),
        ))
        .unwrap();

    persistence
        .update_user_event(
            event_id,
            "Dentist (rescheduled)",
            Some("Moved to July"),
            date(2025, Month::July, 2),
        )
        .unwrap();

    let stored = persistence.get_user_event(event_id).unwrap().unwrap();
    assert_eq!(stored.title, "Dentist (rescheduled)");
    assert_eq!(stored.description.as_deref(), Some("Moved to July"));
    assert_eq!(stored.date, date(2025, Month::July, 2));
}

#[test]
fn test_delete_user_event() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account_id = create_test_account(&mut persistence);

    let event_id = persistence
        .create_user_event(&UserEvent::new(
            account_id,
            String::from("Dentist"),
            None,
            date(2025, Month::June, 15),
        ))
        .unwrap();

    persistence.delete_user_event(event_id).unwrap();
    assert!(persistence.get_user_event(event_id).unwrap().is_none());

    let result = persistence.delete_user_event(event_id);
    assert_eq!(
        result.unwrap_err(),
        PersistenceError::UserEventNotFound(event_id)
    );
}
