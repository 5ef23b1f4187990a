// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Month};

use crate::{
    Account, DomainError, Festival, UserEvent, validate_email, validate_event_title,
    validate_festival_fields,
};

fn create_test_festival() -> Festival {
    Festival {
        festival_id: Some(1),
        event_name: String::from("Hornbill Festival"),
        month: String::from("Dec"),
        general_date: String::from("Early Dec"),
        location: String::from("Kisama, Nagaland"),
        festival_type: String::from("Tribal"),
        summary: String::from("The festival of festivals"),
        hook_intro: String::from("Sixteen tribes, one valley"),
        time_of_day: Some(String::from("Day")),
        latitude: Some(String::from("25.6058")),
        longitude: Some(String::from("94.1086")),
        content_potential: None,
        voiceover_prompt: None,
        ideal_titles: None,
    }
}

#[test]
fn test_festival_descriptor_carries_timing_fields() {
    let festival = create_test_festival();
    let descriptor = festival.descriptor();
    assert_eq!(descriptor.event_name, "Hornbill Festival");
    assert_eq!(descriptor.month, "Dec");
    assert_eq!(descriptor.general_date, "Early Dec");
}

#[test]
fn test_validate_festival_fields() {
    assert!(validate_festival_fields("Hornbill Festival").is_ok());
    assert!(matches!(
        validate_festival_fields(""),
        Err(DomainError::InvalidEventName(_))
    ));
    assert!(matches!(
        validate_festival_fields("   "),
        Err(DomainError::InvalidEventName(_))
    ));
}

#[test]
fn test_account_creation() {
    let account: Account = Account::new(7, String::from("user@example.com"));
    assert_eq!(account.account_id, 7);
    assert_eq!(account.email, "user@example.com");
}

#[test]
fn test_validate_email() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("  user@example.com  ").is_ok());
    for input in ["", "   ", "userexample.com", "@example.com", "user@", "a@b@c"] {
        assert!(
            matches!(validate_email(input), Err(DomainError::InvalidEmail(_))),
            "expected rejection for '{input}'"
        );
    }
}

#[test]
fn test_user_event_constructors() {
    let date = Date::from_calendar_date(2025, Month::June, 15).unwrap();
    let event: UserEvent = UserEvent::new(3, String::from("Dentist"), None, date);
    assert_eq!(event.event_id, None);
    assert_eq!(event.account_id, 3);

    let stored: UserEvent = UserEvent::with_id(
        11,
        3,
        String::from("Dentist"),
        Some(String::from("Annual checkup")),
        date,
    );
    assert_eq!(stored.event_id, Some(11));
    assert_eq!(stored.description.as_deref(), Some("Annual checkup"));
}

#[test]
fn test_validate_event_title() {
    assert!(validate_event_title("Dentist").is_ok());
    assert!(matches!(
        validate_event_title(" "),
        Err(DomainError::InvalidTitle(_))
    ));
}
