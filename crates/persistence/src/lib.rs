// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for FolkCal.
//!
//! This crate provides `SQLite` persistence for the festival catalog, user
//! calendar events, accounts, sessions, and the public-holiday table the
//! date resolver consumes. It is built on Diesel with embedded migrations.
//!
//! `SQLite` is the only backend:
//! - File-based databases (with WAL mode) for deployments
//! - Unique shared in-memory databases for fast, deterministic tests
//!
//! Foreign key enforcement is verified at startup; user events and sessions
//! reference accounts and must never outlive them.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use diesel::SqliteConnection;
use folkcal_domain::{Festival, HolidayTable, UserEvent};
use time::Date;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{AccountData, HolidayData, SessionData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode gives better read concurrency for file-based databases
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Festival Catalog
    // ========================================================================

    /// Creates a new festival catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a festival with the same event name already
    /// exists or the insert fails.
    pub fn create_festival(&mut self, festival: &Festival) -> Result<i64, PersistenceError> {
        mutations::festivals::create_festival(&mut self.conn, festival)
    }

    /// Retrieves a festival by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_festival(&mut self, festival_id: i64) -> Result<Option<Festival>, PersistenceError> {
        queries::festivals::get_festival(&mut self.conn, festival_id)
    }

    /// Retrieves a festival by its event name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_festival_by_name(
        &mut self,
        event_name: &str,
    ) -> Result<Option<Festival>, PersistenceError> {
        queries::festivals::get_festival_by_name(&mut self.conn, event_name)
    }

    /// Lists all festivals in the catalog, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_festivals(&mut self) -> Result<Vec<Festival>, PersistenceError> {
        queries::festivals::list_festivals(&mut self.conn)
    }

    /// Counts the festivals in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_festivals(&mut self) -> Result<i64, PersistenceError> {
        queries::festivals::count_festivals(&mut self.conn)
    }

    /// Updates an existing festival catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the festival does not exist or the update fails.
    pub fn update_festival(
        &mut self,
        festival_id: i64,
        festival: &Festival,
    ) -> Result<(), PersistenceError> {
        mutations::festivals::update_festival(&mut self.conn, festival_id, festival)
    }

    /// Deletes a festival catalog entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the festival does not exist or the delete fails.
    pub fn delete_festival(&mut self, festival_id: i64) -> Result<(), PersistenceError> {
        mutations::festivals::delete_festival(&mut self.conn, festival_id)
    }

    // ========================================================================
    // User Events
    // ========================================================================

    /// Creates a new user event.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_user_event(&mut self, event: &UserEvent) -> Result<i64, PersistenceError> {
        mutations::user_events::create_user_event(&mut self.conn, event)
    }

    /// Retrieves a user event by ID.
    ///
    /// The caller is responsible for checking the returned event's
    /// `account_id` against the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_event(&mut self, event_id: i64) -> Result<Option<UserEvent>, PersistenceError> {
        queries::user_events::get_user_event(&mut self.conn, event_id)
    }

    /// Lists one account's events within a calendar year, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_events_for_year(
        &mut self,
        account_id: i64,
        year: i32,
    ) -> Result<Vec<UserEvent>, PersistenceError> {
        queries::user_events::list_events_for_year(&mut self.conn, account_id, year)
    }

    /// Updates the title, description, and date of an existing user event.
    ///
    /// Ownership must be checked by the caller before invoking this.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist or the update fails.
    pub fn update_user_event(
        &mut self,
        event_id: i64,
        title: &str,
        description: Option<&str>,
        date: Date,
    ) -> Result<(), PersistenceError> {
        mutations::user_events::update_user_event(&mut self.conn, event_id, title, description, date)
    }

    /// Deletes a user event.
    ///
    /// Ownership must be checked by the caller before invoking this.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist or the delete fails.
    pub fn delete_user_event(&mut self, event_id: i64) -> Result<(), PersistenceError> {
        mutations::user_events::delete_user_event(&mut self.conn, event_id)
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Creates a new account.
    ///
    /// The email is normalized to lowercase and the password is hashed with
    /// bcrypt before storage.
    ///
    /// # Errors
    ///
    /// Returns an error if an account with this email already exists or the
    /// insert fails.
    pub fn create_account(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::accounts::create_account(&mut self.conn, email, password)
    }

    /// Retrieves an account by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_email(&mut self.conn, email)
    }

    /// Retrieves an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: i64,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_id(&mut self.conn, account_id)
    }

    /// Disables an account.
    ///
    /// Disabled accounts keep their row but can no longer authenticate.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or the update fails.
    pub fn disable_account(&mut self, account_id: i64) -> Result<(), PersistenceError> {
        mutations::accounts::disable_account(&mut self.conn, account_id)
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the hash is malformed.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::accounts::verify_password(password, password_hash)
    }

    // ========================================================================
    // Session Management
    // ========================================================================

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
        &mut self,
        session_token: &str,
        account_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::accounts::create_session(&mut self.conn, session_token, account_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::accounts::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp of a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::accounts::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::accounts::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all sessions whose expiry timestamp has passed `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::accounts::delete_expired_sessions(&mut self.conn, now)
    }

    /// Deletes all sessions for a specific account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_sessions_for_account(
        &mut self,
        account_id: i64,
    ) -> Result<usize, PersistenceError> {
        mutations::accounts::delete_sessions_for_account(&mut self.conn, account_id)
    }

    // ========================================================================
    // Holidays
    // ========================================================================

    /// Inserts one holiday observance.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_holiday(
        &mut self,
        country: &str,
        year: i32,
        date: &str,
        name: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::holidays::insert_holiday(&mut self.conn, country, year, date, name)
    }

    /// Deletes all holidays for one `(country, year)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn clear_holidays(&mut self, country: &str, year: i32) -> Result<usize, PersistenceError> {
        mutations::holidays::clear_holidays(&mut self.conn, country, year)
    }

    /// Lists the holidays for one `(country, year)` pair, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_holidays(
        &mut self,
        country: &str,
        year: i32,
    ) -> Result<Vec<HolidayData>, PersistenceError> {
        queries::holidays::list_holidays(&mut self.conn, country, year)
    }

    /// Loads the holiday table for one `(country, year)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored date cannot
    /// be parsed.
    pub fn load_holiday_table(
        &mut self,
        country: &str,
        year: i32,
    ) -> Result<HolidayTable, PersistenceError> {
        queries::holidays::load_holiday_table(&mut self.conn, country, year)
    }
}
