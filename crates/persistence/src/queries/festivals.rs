// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Festival catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use folkcal_domain::Festival;
use tracing::debug;

use crate::diesel_schema::festivals;
use crate::error::PersistenceError;

/// Diesel Queryable struct for festival rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = festivals)]
pub(crate) struct FestivalRow {
    festival_id: i64,
    event_name: String,
    month: String,
    general_date: String,
    location: String,
    festival_type: String,
    summary: String,
    hook_intro: String,
    time_of_day: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
    content_potential: Option<String>,
    voiceover_prompt: Option<String>,
    ideal_titles: Option<String>,
}

impl From<FestivalRow> for Festival {
    fn from(row: FestivalRow) -> Self {
        Self {
            festival_id: Some(row.festival_id),
            event_name: row.event_name,
            month: row.month,
            general_date: row.general_date,
            location: row.location,
            festival_type: row.festival_type,
            summary: row.summary,
            hook_intro: row.hook_intro,
            time_of_day: row.time_of_day,
            latitude: row.latitude,
            longitude: row.longitude,
            content_potential: row.content_potential,
            voiceover_prompt: row.voiceover_prompt,
            ideal_titles: row.ideal_titles,
        }
    }
}

/// Retrieves a festival by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the festival is not found.
pub fn get_festival(
    conn: &mut SqliteConnection,
    festival_id: i64,
) -> Result<Option<Festival>, PersistenceError> {
    debug!("Looking up festival by ID: {}", festival_id);

    let result: Result<FestivalRow, diesel::result::Error> = festivals::table
        .filter(festivals::festival_id.eq(festival_id))
        .select(FestivalRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a festival by its event name.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no festival with that name exists.
pub fn get_festival_by_name(
    conn: &mut SqliteConnection,
    event_name: &str,
) -> Result<Option<Festival>, PersistenceError> {
    debug!("Looking up festival by event_name: {}", event_name);

    let result: Result<FestivalRow, diesel::result::Error> = festivals::table
        .filter(festivals::event_name.eq(event_name))
        .select(FestivalRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all festivals in the catalog, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_festivals(conn: &mut SqliteConnection) -> Result<Vec<Festival>, PersistenceError> {
    let rows: Vec<FestivalRow> = festivals::table
        .order(festivals::festival_id.asc())
        .select(FestivalRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Counts the festivals in the catalog.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_festivals(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(festivals::table.count().get_result(conn)?)
}
