// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Festival catalog mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use folkcal_domain::Festival;
use tracing::info;

use crate::diesel_schema::festivals;
use crate::error::PersistenceError;
use crate::queries::festivals::get_festival_by_name;
use crate::sqlite::get_last_insert_rowid;

/// Creates a new festival catalog entry.
///
/// # Errors
///
/// Returns an error if a festival with the same event name already exists
/// or the insert fails.
pub fn create_festival(
    conn: &mut SqliteConnection,
    festival: &Festival,
) -> Result<i64, PersistenceError> {
    info!("Creating festival: {}", festival.event_name);

    if get_festival_by_name(conn, &festival.event_name)?.is_some() {
        return Err(PersistenceError::DuplicateFestival(
            festival.event_name.clone(),
        ));
    }

    diesel::insert_into(festivals::table)
        .values((
            festivals::event_name.eq(&festival.event_name),
            festivals::month.eq(&festival.month),
            festivals::general_date.eq(&festival.general_date),
            festivals::location.eq(&festival.location),
            festivals::festival_type.eq(&festival.festival_type),
            festivals::summary.eq(&festival.summary),
            festivals::hook_intro.eq(&festival.hook_intro),
            festivals::time_of_day.eq(&festival.time_of_day),
            festivals::latitude.eq(&festival.latitude),
            festivals::longitude.eq(&festival.longitude),
            festivals::content_potential.eq(&festival.content_potential),
            festivals::voiceover_prompt.eq(&festival.voiceover_prompt),
            festivals::ideal_titles.eq(&festival.ideal_titles),
        ))
        .execute(conn)?;

    let festival_id: i64 = get_last_insert_rowid(conn)?;

    info!("Created festival with ID: {}", festival_id);

    Ok(festival_id)
}

/// Updates an existing festival catalog entry.
///
/// # Errors
///
/// Returns an error if the festival does not exist or the update fails.
pub fn update_festival(
    conn: &mut SqliteConnection,
    festival_id: i64,
    festival: &Festival,
) -> Result<(), PersistenceError> {
    info!("Updating festival ID: {}", festival_id);

    let updated = diesel::update(festivals::table)
        .filter(festivals::festival_id.eq(festival_id))
        .set((
            festivals::event_name.eq(&festival.event_name),
            festivals::month.eq(&festival.month),
            festivals::general_date.eq(&festival.general_date),
            festivals::location.eq(&festival.location),
            festivals::festival_type.eq(&festival.festival_type),
            festivals::summary.eq(&festival.summary),
            festivals::hook_intro.eq(&festival.hook_intro),
            festivals::time_of_day.eq(&festival.time_of_day),
            festivals::latitude.eq(&festival.latitude),
            festivals::longitude.eq(&festival.longitude),
            festivals::content_potential.eq(&festival.content_potential),
            festivals::voiceover_prompt.eq(&festival.voiceover_prompt),
            festivals::ideal_titles.eq(&festival.ideal_titles),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::FestivalNotFound(festival_id));
    }

    Ok(())
}

/// Deletes a festival catalog entry.
///
/// # Errors
///
/// Returns an error if the festival does not exist or the delete fails.
pub fn delete_festival(
    conn: &mut SqliteConnection,
    festival_id: i64,
) -> Result<(), PersistenceError> {
    info!("Deleting festival ID: {}", festival_id);

    let deleted = diesel::delete(festivals::table)
        .filter(festivals::festival_id.eq(festival_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::FestivalNotFound(festival_id));
    }

    Ok(())
}
