// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User calendar event mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use folkcal_domain::{UserEvent, format_iso_date};
use time::Date;
use tracing::{debug, info};

use crate::diesel_schema::user_events;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Creates a new user event.
///
/// # Errors
///
/// Returns an error if the insert fails (including a missing owning
/// account, rejected by the foreign key constraint).
pub fn create_user_event(
    conn: &mut SqliteConnection,
    event: &UserEvent,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating user event '{}' for account ID: {}",
        event.title, event.account_id
    );

    diesel::insert_into(user_events::table)
        .values((
            user_events::account_id.eq(event.account_id),
            user_events::title.eq(&event.title),
            user_events::description.eq(&event.description),
            user_events::event_date.eq(format_iso_date(event.date)),
        ))
        .execute(conn)?;

    let event_id: i64 = get_last_insert_rowid(conn)?;

    debug!("Created user event with ID: {}", event_id);

    Ok(event_id)
}

/// Updates the title, description, and date of an existing user event.
///
/// Ownership must be checked by the caller before invoking this.
///
/// # Errors
///
/// Returns an error if the event does not exist or the update fails.
pub fn update_user_event(
    conn: &mut SqliteConnection,
    event_id: i64,
    title: &str,
    description: Option<&str>,
    date: Date,
) -> Result<(), PersistenceError> {
    debug!("Updating user event ID: {}", event_id);

    let updated = diesel::update(user_events::table)
        .filter(user_events::event_id.eq(event_id))
        .set((
            user_events::title.eq(title),
            user_events::description.eq(description),
            user_events::event_date.eq(format_iso_date(date)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::UserEventNotFound(event_id));
    }

    Ok(())
}

/// Deletes a user event.
///
/// Ownership must be checked by the caller before invoking this.
///
/// # Errors
///
/// Returns an error if the event does not exist or the delete fails.
pub fn delete_user_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<(), PersistenceError> {
    info!("Deleting user event ID: {}", event_id);

    let deleted = diesel::delete(user_events::table)
        .filter(user_events::event_id.eq(event_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::UserEventNotFound(event_id));
    }

    Ok(())
}
