// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public-holiday queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use folkcal_domain::{HolidayEntry, HolidayTable, parse_iso_date};

use crate::data_models::HolidayData;
use crate::diesel_schema::holidays;
use crate::error::PersistenceError;

/// Diesel Queryable struct for holiday rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = holidays)]
struct HolidayRow {
    holiday_id: i64,
    country: String,
    year: i32,
    holiday_date: String,
    holiday_name: String,
}

impl From<HolidayRow> for HolidayData {
    fn from(row: HolidayRow) -> Self {
        Self {
            holiday_id: row.holiday_id,
            country: row.country,
            year: row.year,
            date: row.holiday_date,
            name: row.holiday_name,
        }
    }
}

/// Lists the holidays for one `(country, year)` pair, ordered by date.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_holidays(
    conn: &mut SqliteConnection,
    country: &str,
    year: i32,
) -> Result<Vec<HolidayData>, PersistenceError> {
    let rows: Vec<HolidayRow> = holidays::table
        .filter(holidays::country.eq(country))
        .filter(holidays::year.eq(year))
        .order(holidays::holiday_date.asc())
        .select(HolidayRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Loads the holiday table for one `(country, year)` pair.
///
/// The table is additionally sorted at construction, so resolver lookups are
/// chronological regardless of storage order.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored date cannot
/// be parsed.
pub fn load_holiday_table(
    conn: &mut SqliteConnection,
    country: &str,
    year: i32,
) -> Result<HolidayTable, PersistenceError> {
    let entries: Vec<HolidayEntry> = list_holidays(conn, country, year)?
        .into_iter()
        .map(|holiday| Ok(HolidayEntry::new(parse_iso_date(&holiday.date)?, holiday.name)))
        .collect::<Result<_, PersistenceError>>()?;

    Ok(HolidayTable::new(country.to_string(), year, entries))
}
