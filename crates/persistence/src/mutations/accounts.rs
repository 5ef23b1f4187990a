// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session mutations.
//!
//! Password hashing lives here, next to the table that stores the hash;
//! plain-text passwords never leave this module and the verify query.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::{accounts, sessions};
use crate::error::PersistenceError;
use crate::queries::accounts::get_account_by_email;
use crate::sqlite::get_last_insert_rowid;

/// Creates a new account.
///
/// The email is normalized to lowercase for case-insensitive uniqueness
/// and the password is hashed with bcrypt before storage.
///
/// # Errors
///
/// Returns an error if an account with this email already exists or the
/// insert fails.
pub fn create_account(
    conn: &mut SqliteConnection,
    email: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    let normalized_email: String = email.to_lowercase();

    info!("Creating account with email: {}", normalized_email);

    if get_account_by_email(conn, &normalized_email)?.is_some() {
        return Err(PersistenceError::DuplicateAccount(normalized_email));
    }

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(accounts::table)
        .values((
            accounts::email.eq(&normalized_email),
            accounts::password_hash.eq(&password_hash),
        ))
        .execute(conn)?;

    let account_id: i64 = get_last_insert_rowid(conn)?;

    info!("Created account with ID: {}", account_id);

    Ok(account_id)
}

/// Disables an account.
///
/// Disabled accounts keep their row but can no longer authenticate.
///
/// # Errors
///
/// Returns an error if the account does not exist or the update fails.
pub fn disable_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<(), PersistenceError> {
    info!("Disabling account ID: {}", account_id);

    let updated = diesel::update(accounts::table)
        .filter(accounts::account_id.eq(account_id))
        .set(accounts::is_disabled.eq(1))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::AccountNotFound(account_id.to_string()));
    }

    Ok(())
}

/// Creates a new session for an account.
///
/// # Arguments
///
/// * `session_token` - The unique session token
/// * `account_id` - The account ID
/// * `expires_at` - The expiration timestamp (ISO 8601 format)
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!("Creating session for account ID: {}", account_id);

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    Ok(get_last_insert_rowid(conn)?)
}

/// Updates the last activity timestamp of a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    debug!("Updating last_activity_at for session ID: {}", session_id);

    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(
            sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    Ok(())
}

/// Deletes a session by token.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    debug!("Deleting session");

    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(())
}

/// Deletes all sessions whose expiry timestamp has passed `now`.
///
/// Timestamps are ISO 8601 text, so the comparison is lexicographic.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let deleted = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(now))
        .execute(conn)?;

    if deleted > 0 {
        info!("Deleted {} expired sessions", deleted);
    }

    Ok(deleted)
}

/// Deletes all sessions for a specific account.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_sessions_for_account(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<usize, PersistenceError> {
    debug!("Deleting all sessions for account ID: {}", account_id);

    Ok(diesel::delete(sessions::table)
        .filter(sessions::account_id.eq(account_id))
        .execute(conn)?)
}
