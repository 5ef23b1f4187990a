// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import for the festival catalog and the holiday table.
//!
//! The festival CSV uses the headers of the original dataset
//! (`Event/Festival`, `Month`, `Date`, `Location`, `Type`,
//! `Experience Summary`, plus optional media columns). Headers are matched
//! case-insensitively after normalization, so decorated variants like
//! `🎬 Hook/Intro Line` resolve to `hook/intro_line`.

use csv::StringRecord;
use std::collections::HashMap;

use folkcal_domain::{Festival, parse_iso_date};
use folkcal_persistence::Persistence;
use tracing::info;

use crate::error::{ApiError, translate_persistence_error};

/// A single row result from a CSV import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed event name (if present).
    pub event_name: Option<String>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvRowStatus {
    /// Row was imported.
    Imported,
    /// Row has validation errors and was skipped.
    Invalid,
}

/// Result of a CSV import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvImportResult {
    /// Per-row results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of data rows.
    pub total_rows: usize,
    /// Number of imported rows.
    pub imported_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Required festival CSV column headers (case-insensitive, normalized).
const REQUIRED_FESTIVAL_HEADERS: &[&str] = &[
    "event/festival",
    "month",
    "date",
    "location",
    "type",
    "experience_summary",
];

/// Required holiday CSV column headers.
const REQUIRED_HOLIDAY_HEADERS: &[&str] = &["country", "year", "date", "name"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant
/// matching. Decorations in front of the header text (the original dataset
/// prefixes some headers with emoji) are stripped.
fn normalize_header(header: &str) -> String {
    let lowered: String = header.trim().to_lowercase().replace(' ', "_");
    lowered
        .trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_string()
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(
    headers: &StringRecord,
    required: &[&str],
) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for name in required {
        if !header_map.contains_key(*name) {
            missing.push(String::from(*name));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Parses a festival CSV row into a `Festival` if possible.
///
/// Returns `Ok(Festival)` if all required fields are present, or
/// `Err(Vec<String>)` with error messages.
fn parse_festival_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<Festival, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut required = |name: &str| -> String {
        get_field(name).unwrap_or_else(|| {
            errors.push(format!("{name}: required field is missing or empty"));
            String::new()
        })
    };

    let event_name: String = required("event/festival");
    let month: String = required("month");
    let general_date: String = required("date");
    let location: String = required("location");
    let festival_type: String = required("type");
    let summary: String = required("experience_summary");

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Festival {
        festival_id: None,
        event_name,
        month,
        general_date,
        location,
        festival_type,
        summary,
        hook_intro: get_field("hook/intro_line").unwrap_or_default(),
        time_of_day: get_field("time_of_day"),
        latitude: get_field("latitude"),
        longitude: get_field("longitude"),
        content_potential: get_field("content_potential"),
        voiceover_prompt: get_field("voiceover_prompt"),
        ideal_titles: get_field("ideal_titles"),
    })
}

/// Imports festival catalog entries from CSV data.
///
/// Every row is validated; valid rows are inserted and rows that fail
/// validation or collide with an existing event name are reported as
/// invalid without aborting the rest of the import.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed or required headers are
/// missing.
pub fn import_festival_csv(
    persistence: &mut Persistence,
    data: &str,
) -> Result<CsvImportResult, ApiError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers, REQUIRED_FESTIVAL_HEADERS)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match record {
            Ok(r) => r,
            Err(e) => {
                rows.push(CsvRowResult {
                    row_number,
                    event_name: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![format!("Failed to parse row: {e}")],
                });
                continue;
            }
        };

        match parse_festival_row(&record, &header_map) {
            Ok(festival) => {
                let event_name: String = festival.event_name.clone();
                match persistence.create_festival(&festival) {
                    Ok(_) => rows.push(CsvRowResult {
                        row_number,
                        event_name: Some(event_name),
                        status: CsvRowStatus::Imported,
                        errors: Vec::new(),
                    }),
                    Err(e) => rows.push(CsvRowResult {
                        row_number,
                        event_name: Some(event_name),
                        status: CsvRowStatus::Invalid,
                        errors: vec![translate_persistence_error(e).to_string()],
                    }),
                }
            }
            Err(errors) => rows.push(CsvRowResult {
                row_number,
                event_name: None,
                status: CsvRowStatus::Invalid,
                errors,
            }),
        }
    }

    let result: CsvImportResult = summarize(rows);
    info!(
        total = result.total_rows,
        imported = result.imported_count,
        invalid = result.invalid_count,
        "Festival CSV import finished"
    );
    Ok(result)
}

/// Imports holiday observances from CSV data (`country,year,date,name`).
///
/// Dates must be `YYYY-MM-DD`. Valid rows are inserted; invalid rows are
/// reported without aborting the import.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed or required headers are
/// missing.
pub fn import_holiday_csv(
    persistence: &mut Persistence,
    data: &str,
) -> Result<CsvImportResult, ApiError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers, REQUIRED_HOLIDAY_HEADERS)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match record {
            Ok(r) => r,
            Err(e) => {
                rows.push(CsvRowResult {
                    row_number,
                    event_name: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![format!("Failed to parse row: {e}")],
                });
                continue;
            }
        };

        rows.push(import_holiday_row(persistence, &record, &header_map, row_number));
    }

    let result: CsvImportResult = summarize(rows);
    info!(
        total = result.total_rows,
        imported = result.imported_count,
        invalid = result.invalid_count,
        "Holiday CSV import finished"
    );
    Ok(result)
}

/// Validates and inserts one holiday CSV row.
fn import_holiday_row(
    persistence: &mut Persistence,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row_number: usize,
) -> CsvRowResult {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut required = |name: &str| -> String {
        get_field(name).unwrap_or_else(|| {
            errors.push(format!("{name}: required field is missing or empty"));
            String::new()
        })
    };

    let country: String = required("country");
    let year_str: String = required("year");
    let date: String = required("date");
    let name: String = required("name");

    let year: Option<i32> = match year_str.parse::<i32>() {
        Ok(y) => Some(y),
        Err(_) => {
            if !year_str.is_empty() {
                errors.push(format!("year: invalid number '{year_str}'"));
            }
            None
        }
    };

    if !date.is_empty() && parse_iso_date(&date).is_err() {
        errors.push(format!("date: '{date}' is not a valid YYYY-MM-DD date"));
    }

    if !errors.is_empty() {
        return CsvRowResult {
            row_number,
            event_name: None,
            status: CsvRowStatus::Invalid,
            errors,
        };
    }

    // year is Some here: parse failures were recorded as errors above
    let Some(year) = year else {
        return CsvRowResult {
            row_number,
            event_name: None,
            status: CsvRowStatus::Invalid,
            errors: vec![String::from("year: required field is missing or empty")],
        };
    };

    match persistence.insert_holiday(&country, year, &date, &name) {
        Ok(_) => CsvRowResult {
            row_number,
            event_name: Some(name),
            status: CsvRowStatus::Imported,
            errors: Vec::new(),
        },
        Err(e) => CsvRowResult {
            row_number,
            event_name: Some(name),
            status: CsvRowStatus::Invalid,
            errors: vec![translate_persistence_error(e).to_string()],
        },
    }
}

/// Aggregates per-row results into an import summary.
fn summarize(rows: Vec<CsvRowResult>) -> CsvImportResult {
    let total_rows: usize = rows.len();
    let imported_count: usize = rows
        .iter()
        .filter(|r| r.status == CsvRowStatus::Imported)
        .count();
    let invalid_count: usize = total_rows - imported_count;

    CsvImportResult {
        rows,
        total_rows,
        imported_count,
        invalid_count,
    }
}
