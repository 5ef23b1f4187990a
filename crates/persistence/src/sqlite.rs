// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` plumbing that has no Diesel DSL equivalent.
//!
//! Everything here is raw SQL by necessity: PRAGMA statements for
//! connection configuration, the `last_insert_rowid()` workaround, and
//! embedded migration execution. Catalog, account, and event access stays
//! in `queries/` and `mutations/`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded schema migrations, compiled in from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Opens a connection, switches on foreign keys, and migrates the schema.
///
/// `database_url` may be a file path or a `file:...?mode=memory` URL for
/// shared in-memory databases.
///
/// # Errors
///
/// Returns an error if the connection cannot be established, the PRAGMA
/// fails, or a migration fails to apply.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!("Initializing SQLite database at: {}", database_url);

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    // user_events and sessions reference accounts; SQLite leaves FK
    // enforcement off unless asked per connection
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    debug!("Applying pending schema migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Switches a file-backed database into WAL journal mode.
///
/// WAL lets readers proceed while a write is in flight, which matters once
/// the server shares one database file across requests. Never applied to
/// in-memory databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Row shape for `PRAGMA foreign_keys`.
#[derive(QueryableByName)]
struct ForeignKeysPragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Confirms that the connection actually enforces foreign keys.
///
/// The PRAGMA in [`initialize_database`] is per-connection and silently
/// ignored by `SQLite` builds compiled without FK support, so startup
/// re-reads the setting instead of trusting it.
///
/// # Errors
///
/// Returns [`PersistenceError::ForeignKeyEnforcementNotEnabled`] if the
/// pragma reads back as off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<ForeignKeysPragmaRow>(conn)?
        .foreign_keys;

    if enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("Foreign key enforcement verified");
    Ok(())
}

/// Reads `last_insert_rowid()` for the connection.
///
/// Inserts here don't use `RETURNING`, so the generated ID is fetched
/// right after the insert on the same connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
