//! CSV ingest for workout exports.
//!
//! Reads the export with a header row, addresses columns by name rather than
//! position, and converts each row into a [`WorkoutRecord`]. A malformed row
//! never aborts the batch: it is skipped and recorded as a [`RowError`] so
//! the caller can audit what was dropped.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use tracing::{debug, warn};
use workout_core::duration::parse_duration;
use workout_core::error::{ChartError, Result};
use workout_core::models::{RowError, WorkoutRecord};

// ── Column names ──────────────────────────────────────────────────────────────

/// Required columns. A header missing any of these fails the whole load.
pub const COL_CATEGORY: &str = "Type";
pub const COL_DATE: &str = "Date";
pub const COL_DURATION: &str = "Duration";

/// Optional numeric columns. Absent column or empty cell parses to `None`.
pub const COL_CALORIES: &str = "Calories";
pub const COL_AVG_HR: &str = "Avg HR";
pub const COL_MAX_HR: &str = "Max HR";

/// Date layouts accepted for the start-timestamp column. Time of day, when
/// present, is discarded.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ── Public types ──────────────────────────────────────────────────────────────

/// Everything the parser produced from one export file.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Accepted records, sorted ascending by date (stable: same-day rows keep
    /// their original file order).
    pub records: Vec<WorkoutRecord>,
    /// Rows rejected for malformed duration or date, with line numbers.
    pub skipped: Vec<RowError>,
    /// Total data rows seen, including dropped-category and skipped rows.
    pub rows_read: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse a workout export.
///
/// Rows whose category is not in `categories` are dropped here and never
/// appear downstream. Row-level parse failures are collected in
/// [`ParseOutcome::skipped`]; only a missing file, unreadable CSV structure
/// or missing required column fails the load as a whole.
pub fn read_export(path: &Path, categories: &[String]) -> Result<ParseOutcome> {
    let file = std::fs::File::open(path).map_err(|source| ChartError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);

    for required in [COL_CATEGORY, COL_DATE, COL_DURATION] {
        if !header_map.contains_key(&required.to_lowercase()) {
            return Err(ChartError::MissingColumn(required.to_string()));
        }
    }

    let mut records: Vec<WorkoutRecord> = Vec::new();
    let mut skipped: Vec<RowError> = Vec::new();
    let mut rows_read = 0usize;

    for (index, row_result) in reader.records().enumerate() {
        rows_read += 1;
        // The csv position is the authoritative line number: a quoted field
        // can span physical lines. Header occupies line 1, so the fallback
        // for a missing position is index + 2.
        let row = match row_result {
            Ok(r) => r,
            Err(e) => {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(index + 2);
                skipped.push(RowError {
                    line,
                    message: format!("unreadable row: {e}"),
                });
                continue;
            }
        };
        let line = row.position().map(|p| p.line() as usize).unwrap_or(index + 2);

        let category = match field(&row, &header_map, COL_CATEGORY) {
            Some(c) if !c.is_empty() => c,
            _ => {
                skipped.push(RowError {
                    line,
                    message: "empty category field".to_string(),
                });
                continue;
            }
        };
        if !categories.iter().any(|c| c == category) {
            // Not one of the configured categories; drop without noise.
            continue;
        }

        match parse_row(&row, &header_map, category, line) {
            Ok(record) => records.push(record),
            Err(row_error) => {
                warn!(line = row_error.line, "{}", row_error.message);
                skipped.push(row_error);
            }
        }
    }

    // sort_by_key is stable, so same-day sessions keep their file order.
    records.sort_by_key(|r| r.date);

    debug!(
        "Export {}: {} rows read, {} kept, {} skipped",
        path.display(),
        rows_read,
        records.len(),
        skipped.len()
    );

    Ok(ParseOutcome {
        records,
        skipped,
        rows_read,
    })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Map lowercased header names to their column index.
fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim().to_lowercase(), i))
        .collect()
}

/// Look up a field by column name. `None` when the column is absent or the
/// row is too short.
fn field<'a>(
    row: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    column: &str,
) -> Option<&'a str> {
    header_map
        .get(&column.to_lowercase())
        .and_then(|&i| row.get(i))
}

/// Parse one data row into a [`WorkoutRecord`], or explain why it was skipped.
fn parse_row(
    row: &StringRecord,
    header_map: &HashMap<String, usize>,
    category: &str,
    line: usize,
) -> std::result::Result<WorkoutRecord, RowError> {
    let raw_duration = field(row, header_map, COL_DURATION).unwrap_or_default();
    let duration_minutes = parse_duration(raw_duration).ok_or_else(|| RowError {
        line,
        message: format!("malformed duration \"{raw_duration}\" (expected H:MM)"),
    })?;

    let raw_date = field(row, header_map, COL_DATE).unwrap_or_default();
    let date = parse_date(raw_date).ok_or_else(|| RowError {
        line,
        message: format!("malformed date \"{raw_date}\""),
    })?;

    Ok(WorkoutRecord {
        category: category.to_string(),
        date,
        duration_minutes,
        calories: numeric_field(row, header_map, COL_CALORIES),
        avg_heart_rate: numeric_field(row, header_map, COL_AVG_HR),
        max_heart_rate: numeric_field(row, header_map, COL_MAX_HR),
    })
}

/// Reduce a start timestamp to its calendar date.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse an optional numeric cell. Empty, missing or non-numeric → `None`.
fn numeric_field(
    row: &StringRecord,
    header_map: &HashMap<String, usize>,
    column: &str,
) -> Option<f64> {
    field(row, header_map, column)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
