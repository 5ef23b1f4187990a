// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account authentication and session management.

use folkcal_domain::validate_email;
use folkcal_persistence::{AccountData, Persistence, PersistenceError, SessionData};
use time::{Duration, OffsetDateTime};

use crate::error::{ApiError, AuthError, translate_persistence_error};
use crate::password_policy::PasswordPolicy;

/// An authenticated account.
///
/// This represents a registered user whose session token has been validated.
/// There are no roles: every account may maintain the festival catalog and
/// owns exactly its own calendar events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    /// The canonical account identifier.
    pub account_id: i64,
    /// The account email (normalized lowercase).
    pub email: String,
}

impl AuthenticatedAccount {
    /// Creates a new authenticated account.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The canonical account identifier
    /// * `email` - The account email
    #[must_use]
    pub const fn new(account_id: i64, email: String) -> Self {
        Self { account_id, email }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Registers a new account.
    ///
    /// Validates the email shape and the password policy, then creates the
    /// account. The persistence layer normalizes the email and hashes the
    /// password.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The login email
    /// * `password` - The plain-text password
    /// * `confirmation` - The password confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed, the password violates the
    /// policy, or an account with this email already exists.
    pub fn register(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<AuthenticatedAccount, ApiError> {
        validate_email(email).map_err(crate::error::translate_domain_error)?;
        PasswordPolicy::default().validate(password, confirmation, email)?;

        let account_id: i64 = persistence
            .create_account(email, password)
            .map_err(translate_persistence_error)?;

        Ok(AuthenticatedAccount::new(account_id, email.to_lowercase()))
    }

    /// Authenticates an account and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The login email
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `expires_at`, `authenticated_account`)
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist, is disabled, or the
    /// password does not match. The three cases share one error message so
    /// that login failures do not reveal which accounts exist.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<(String, String, AuthenticatedAccount), AuthError> {
        let account: AccountData = persistence
            .get_account_by_email(email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(Self::invalid_credentials)?;

        let password_matches: bool = persistence
            .verify_password(password, &account.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !password_matches {
            return Err(Self::invalid_credentials());
        }

        // Only revealed once the caller has proven the credentials
        if account.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, account.account_id, &expires_at_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        let authenticated_account: AuthenticatedAccount =
            AuthenticatedAccount::new(account.account_id, account.email);

        Ok((session_token, expires_at_str, authenticated_account))
    }

    /// Validates a session token and returns the authenticated account.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired, or the account
    /// no longer exists or is disabled.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedAccount, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account: AccountData = persistence
            .get_account_by_id(session.account_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        if account.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is disabled"),
            });
        }

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok(AuthenticatedAccount::new(account.account_id, account.email))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates a session token.
    ///
    /// The token combines a nanosecond timestamp with random bits; it is
    /// opaque to clients and unique per login.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// The uniform credential failure returned for unknown accounts and
    /// wrong passwords.
    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid email or password"),
        }
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionNotFound(msg) => AuthError::AuthenticationFailed {
                reason: msg,
            },
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
