// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use folkcal_persistence::Persistence;

use crate::auth::AuthenticatedAccount;
use crate::handlers::register_account;
use crate::request_response::{FestivalUpsertRequest, RegisterAccountRequest};

pub const TEST_PASSWORD: &str = "hunter2hunter2";

/// Registers an account through the API boundary and returns its identity.
pub fn register_test_account(persistence: &mut Persistence, email: &str) -> AuthenticatedAccount {
    let response = register_account(
        persistence,
        &RegisterAccountRequest {
            email: String::from(email),
            password: String::from(TEST_PASSWORD),
            password_confirmation: String::from(TEST_PASSWORD),
        },
    )
    .unwrap();

    AuthenticatedAccount::new(response.account_id, response.email)
}

/// Builds a minimal festival upsert request.
pub fn festival_request(event_name: &str, month: &str, general_date: &str) -> FestivalUpsertRequest {
    FestivalUpsertRequest {
        event_name: String::from(event_name),
        month: String::from(month),
        general_date: String::from(general_date),
        location: String::from("Test State"),
        festival_type: String::from("Folklore"),
        summary: String::from("Test summary"),
        hook_intro: String::from("Test hook"),
        time_of_day: None,
        latitude: None,
        longitude: None,
        content_potential: None,
        voiceover_prompt: None,
        ideal_titles: None,
    }
}
