use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single parsed workout session read from one CSV row.
///
/// Records are created once at load time and never mutated afterwards; a
/// reload replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Activity category label, one of the configured set (e.g. `"Squash"`).
    pub category: String,
    /// Calendar date of the workout start. Time of day is dropped at parse
    /// time; nothing downstream needs it.
    pub date: NaiveDate,
    /// Session length in whole minutes, derived from the `"H:MM"` field.
    pub duration_minutes: u32,
    /// Active energy in kcal. `None` when the export left the cell empty.
    #[serde(default)]
    pub calories: Option<f64>,
    /// Average heart rate in bpm, when recorded.
    #[serde(default)]
    pub avg_heart_rate: Option<f64>,
    /// Maximum heart rate in bpm, when recorded.
    #[serde(default)]
    pub max_heart_rate: Option<f64>,
}

/// Aggregate summary for one activity category.
///
/// `Default` is the documented zero-state returned for a category with no
/// matching records: all fields zero, no division ever attempted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Number of sessions in the category.
    pub session_count: usize,
    /// Sum of all session durations in minutes.
    pub total_duration_minutes: u32,
    /// Mean calories per session, rounded to the nearest integer.
    ///
    /// Averaged over the sessions that actually carry a calorie value;
    /// sessions without one still count toward `session_count`.
    pub avg_calories: i64,
    /// Highest maximum heart rate seen across the category. Sessions without
    /// a reading contribute 0, so an all-absent category reports 0.
    pub max_heart_rate: f64,
}

/// One chart-ready point of the per-category series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Display-formatted date label, e.g. `"Mar 1"`.
    pub date_label: String,
    /// Calories for the session; 0.0 when the record had none.
    pub calories: f64,
    /// Max heart rate for the session, for overlay plots; 0.0 when absent.
    pub max_heart_rate: f64,
}

/// A single input row that was rejected during parsing.
///
/// Kept alongside the accepted records so data-quality problems stay
/// visible instead of disappearing silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based line number in the source file (header is line 1).
    pub line: usize,
    /// What was wrong with the row.
    pub message: String,
}
