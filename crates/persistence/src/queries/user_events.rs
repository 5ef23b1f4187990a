// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User calendar event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use folkcal_domain::{UserEvent, parse_iso_date};
use tracing::debug;

use crate::diesel_schema::user_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = user_events)]
struct UserEventRow {
    event_id: i64,
    account_id: i64,
    title: String,
    description: Option<String>,
    event_date: String,
}

fn row_to_event(row: UserEventRow) -> Result<UserEvent, PersistenceError> {
    let date = parse_iso_date(&row.event_date)?;
    Ok(UserEvent::with_id(
        row.event_id,
        row.account_id,
        row.title,
        row.description,
        date,
    ))
}

/// Retrieves a user event by ID.
///
/// The caller is responsible for checking the returned event's `account_id`
/// against the authenticated account.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored date cannot
/// be parsed.
/// Returns `Ok(None)` if the event is not found.
pub fn get_user_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Option<UserEvent>, PersistenceError> {
    debug!("Looking up user event by ID: {}", event_id);

    let result: Result<UserEventRow, diesel::result::Error> = user_events::table
        .filter(user_events::event_id.eq(event_id))
        .select(UserEventRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row_to_event(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists one account's events falling within a calendar year, ordered by date.
///
/// Dates are stored as `YYYY-MM-DD` text, so the year filter is a
/// lexicographic range over the two year-boundary strings.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored date cannot
/// be parsed.
pub fn list_events_for_year(
    conn: &mut SqliteConnection,
    account_id: i64,
    year: i32,
) -> Result<Vec<UserEvent>, PersistenceError> {
    let year_start = format!("{year:04}-01-01");
    let year_end = format!("{year:04}-12-31");

    let rows: Vec<UserEventRow> = user_events::table
        .filter(user_events::account_id.eq(account_id))
        .filter(user_events::event_date.ge(year_start))
        .filter(user_events::event_date.le(year_end))
        .order(user_events::event_date.asc())
        .select(UserEventRow::as_select())
        .load(conn)?;

    rows.into_iter().map(row_to_event).collect()
}
