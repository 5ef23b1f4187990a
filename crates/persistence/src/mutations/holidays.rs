// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public-holiday mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::holidays;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts one holiday observance.
///
/// # Arguments
///
/// * `country` - The country code (e.g., "IN")
/// * `year` - The calendar year
/// * `date` - The observed date (`YYYY-MM-DD`)
/// * `name` - The official holiday name
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_holiday(
    conn: &mut SqliteConnection,
    country: &str,
    year: i32,
    date: &str,
    name: &str,
) -> Result<i64, PersistenceError> {
    debug!("Inserting holiday '{}' on {} ({})", name, date, country);

    diesel::insert_into(holidays::table)
        .values((
            holidays::country.eq(country),
            holidays::year.eq(year),
            holidays::holiday_date.eq(date),
            holidays::holiday_name.eq(name),
        ))
        .execute(conn)?;

    Ok(get_last_insert_rowid(conn)?)
}

/// Deletes all holidays for one `(country, year)` pair.
///
/// Used before re-seeding a year's holiday data.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn clear_holidays(
    conn: &mut SqliteConnection,
    country: &str,
    year: i32,
) -> Result<usize, PersistenceError> {
    let deleted = diesel::delete(holidays::table)
        .filter(holidays::country.eq(country))
        .filter(holidays::year.eq(year))
        .execute(conn)?;

    if deleted > 0 {
        info!("Cleared {} holidays for {} {}", deleted, country, year);
    }

    Ok(deleted)
}
