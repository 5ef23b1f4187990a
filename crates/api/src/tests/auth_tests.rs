// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for registration, login, session validation, and logout.

use folkcal_persistence::Persistence;

use crate::auth::AuthenticationService;
use crate::error::{ApiError, AuthError};
use crate::handlers::{login, logout, register_account};
use crate::request_response::{LoginRequest, RegisterAccountRequest};
use crate::tests::helpers::{TEST_PASSWORD, register_test_account};

fn register_request(email: &str, password: &str) -> RegisterAccountRequest {
    RegisterAccountRequest {
        email: String::from(email),
        password: String::from(password),
        password_confirmation: String::from(password),
    }
}

#[test]
fn test_register_normalizes_email() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let response = register_account(
        &mut persistence,
        &register_request("User@Example.com", TEST_PASSWORD),
    )
    .unwrap();

    assert_eq!(response.email, "user@example.com");
    assert!(response.account_id > 0);
}

#[test]
fn test_register_rejects_malformed_email() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = register_account(
        &mut persistence,
        &register_request("not-an-email", TEST_PASSWORD),
    );

    match result.unwrap_err() {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "email"),
        other => panic!("Expected InvalidInput error, got: {other:?}"),
    }
}

#[test]
fn test_register_enforces_password_policy() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = register_account(
        &mut persistence,
        &register_request("user@example.com", "short1"),
    );

    match result.unwrap_err() {
        ApiError::PasswordPolicyViolation { .. } => (),
        other => panic!("Expected PasswordPolicyViolation error, got: {other:?}"),
    }
}

#[test]
fn test_register_rejects_confirmation_mismatch() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = register_account(
        &mut persistence,
        &RegisterAccountRequest {
            email: String::from("user@example.com"),
            password: String::from(TEST_PASSWORD),
            password_confirmation: String::from("different-password1"),
        },
    );

    match result.unwrap_err() {
        ApiError::PasswordPolicyViolation { .. } => (),
        other => panic!("Expected PasswordPolicyViolation error, got: {other:?}"),
    }
}

#[test]
fn test_register_rejects_duplicate_email() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    register_test_account(&mut persistence, "user@example.com");

    let result = register_account(
        &mut persistence,
        &register_request("USER@example.com", TEST_PASSWORD),
    );

    match result.unwrap_err() {
        ApiError::DomainRuleViolation { rule, .. } => assert_eq!(rule, "unique_email"),
        other => panic!("Expected DomainRuleViolation error, got: {other:?}"),
    }
}

#[test]
fn test_login_creates_session() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = register_test_account(&mut persistence, "user@example.com");

    let response = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("user@example.com"),
            password: String::from(TEST_PASSWORD),
        },
    )
    .unwrap();

    assert_eq!(response.account_id, account.account_id);
    assert!(response.session_token.starts_with("session_"));

    let validated =
        AuthenticationService::validate_session(&mut persistence, &response.session_token)
            .unwrap();
    assert_eq!(validated.account_id, account.account_id);
    assert_eq!(validated.email, "user@example.com");
}

#[test]
fn test_login_with_wrong_password_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    register_test_account(&mut persistence, "user@example.com");

    let result = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("user@example.com"),
            password: String::from("wrong-password1"),
        },
    );

    match result.unwrap_err() {
        ApiError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Invalid email or password");
        }
        other => panic!("Expected AuthenticationFailed error, got: {other:?}"),
    }
}

#[test]
fn test_login_with_unknown_email_uses_uniform_error() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("nobody@example.com"),
            password: String::from(TEST_PASSWORD),
        },
    );

    // Same message as the wrong-password case: login must not reveal
    // which accounts exist.
    match result.unwrap_err() {
        ApiError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Invalid email or password");
        }
        other => panic!("Expected AuthenticationFailed error, got: {other:?}"),
    }
}

#[test]
fn test_disabled_account_cannot_login() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = register_test_account(&mut persistence, "user@example.com");

    persistence.disable_account(account.account_id).unwrap();

    let result = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("user@example.com"),
            password: String::from(TEST_PASSWORD),
        },
    );

    match result.unwrap_err() {
        ApiError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Account is disabled");
        }
        other => panic!("Expected AuthenticationFailed error, got: {other:?}"),
    }
}

#[test]
fn test_disabling_account_invalidates_existing_sessions() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = register_test_account(&mut persistence, "user@example.com");

    let response = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("user@example.com"),
            password: String::from(TEST_PASSWORD),
        },
    )
    .unwrap();

    persistence.disable_account(account.account_id).unwrap();

    let result =
        AuthenticationService::validate_session(&mut persistence, &response.session_token);
    match result.unwrap_err() {
        AuthError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Account is disabled");
        }
        AuthError::Unauthorized { .. } => panic!("Expected AuthenticationFailed error"),
    }
}

#[test]
fn test_validate_session_rejects_unknown_token() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = AuthenticationService::validate_session(&mut persistence, "no-such-token");
    match result.unwrap_err() {
        AuthError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Invalid session token");
        }
        AuthError::Unauthorized { .. } => panic!("Expected AuthenticationFailed error"),
    }
}

#[test]
fn test_validate_session_rejects_expired_session() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let account = register_test_account(&mut persistence, "user@example.com");

    persistence
        .create_session("stale-token", account.account_id, "2020-01-01T00:00:00Z")
        .unwrap();

    let result = AuthenticationService::validate_session(&mut persistence, "stale-token");
    match result.unwrap_err() {
        AuthError::AuthenticationFailed { reason } => {
            assert_eq!(reason, "Session expired");
        }
        AuthError::Unauthorized { .. } => panic!("Expected AuthenticationFailed error"),
    }
}

#[test]
fn test_logout_deletes_session() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    register_test_account(&mut persistence, "user@example.com");

    let response = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("user@example.com"),
            password: String::from(TEST_PASSWORD),
        },
    )
    .unwrap();

    logout(&mut persistence, &response.session_token).unwrap();

    let result =
        AuthenticationService::validate_session(&mut persistence, &response.session_token);
    assert!(result.is_err());
}
