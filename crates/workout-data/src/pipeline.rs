//! Top-level analysis pipeline for Workout Charts.
//!
//! Runs parse → filter → aggregate → series for every configured category
//! and returns a [`ChartData`] ready for the presentation layer. The whole
//! pipeline either succeeds or fails; no partial result escapes.

use chrono::Utc;
use workout_core::error::Result;
use workout_core::models::{CategoryStats, RowError, SeriesPoint};

use crate::aggregator::aggregate;
use crate::filter::filter_by_category;
use crate::reader::read_export;
use crate::series::build_series;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the chart result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChartMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Total data rows read from the export.
    pub rows_read: usize,
    /// Rows parsed into records across all configured categories.
    pub rows_used: usize,
    /// Rows rejected for malformed fields, with line numbers.
    pub skipped: Vec<RowError>,
    /// Wall-clock seconds spent reading and parsing the export.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent aggregating and building series.
    pub transform_time_seconds: f64,
}

/// Stats and chart series for one configured category.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CategoryReport {
    /// The category label this report covers.
    pub label: String,
    /// Aggregate summary; the zero-state when no sessions matched.
    pub stats: CategoryStats,
    /// Chronological per-session points for plotting.
    pub series: Vec<SeriesPoint>,
}

/// The complete output of [`analyze_workouts`]: one report per configured
/// category, in configuration order, plus run metadata.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChartData {
    pub categories: Vec<CategoryReport>,
    pub metadata: ChartMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline over one export file.
///
/// 1. Parse the export into typed records (unconfigured categories dropped,
///    malformed rows skipped and recorded).
/// 2. For each configured category: filter, aggregate, build the series.
/// 3. Return a [`ChartData`] with run metadata.
///
/// A category with no sessions still gets a report, carrying the zero-state
/// stats and an empty series.
pub fn analyze_workouts(path: &std::path::Path, categories: &[String]) -> Result<ChartData> {
    let load_start = std::time::Instant::now();
    let outcome = read_export(path, categories)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let transform_start = std::time::Instant::now();
    let reports: Vec<CategoryReport> = categories
        .iter()
        .map(|label| {
            let records = filter_by_category(&outcome.records, label);
            CategoryReport {
                label: label.clone(),
                stats: aggregate(&records),
                series: build_series(&records),
            }
        })
        .collect();
    let transform_time = transform_start.elapsed().as_secs_f64();

    let metadata = ChartMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_read: outcome.rows_read,
        rows_used: outcome.records.len(),
        skipped: outcome.skipped,
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    };

    Ok(ChartData {
        categories: reports,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    const HEADER: &str = "Type,Date,Duration,Calories,Avg HR,Max HR";

    fn both_categories() -> Vec<String> {
        vec!["Squash".to_string(), "Tennis".to_string()]
    }

    // ── end-to-end reference scenario ─────────────────────────────────────────

    #[test]
    fn test_end_to_end_squash_stats() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[
                HEADER,
                "Squash,2024-03-01,1:05,300,132,150",
                "Squash,2024-03-02,0:45,200,140,170",
            ],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        let squash = &data.categories[0];
        assert_eq!(squash.label, "Squash");
        assert_eq!(squash.stats.session_count, 2);
        assert_eq!(squash.stats.total_duration_minutes, 110);
        assert_eq!(
            workout_core::duration::format_duration(squash.stats.total_duration_minutes),
            "1h 50m"
        );
        assert_eq!(squash.stats.avg_calories, 250);
        assert_eq!(squash.stats.max_heart_rate, 170.0);
        assert_eq!(squash.series.len(), 2);
    }

    #[test]
    fn test_category_with_no_sessions_gets_zero_state_report() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[HEADER, "Squash,2024-03-01,1:05,300,132,150"],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        let tennis = &data.categories[1];
        assert_eq!(tennis.label, "Tennis");
        assert_eq!(tennis.stats, workout_core::models::CategoryStats::default());
        assert!(tennis.series.is_empty());
    }

    #[test]
    fn test_reports_follow_configuration_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "export.csv", &[HEADER]);

        let categories = vec!["Tennis".to_string(), "Squash".to_string()];
        let data = analyze_workouts(&path, &categories).unwrap();
        let labels: Vec<&str> = data.categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Tennis", "Squash"]);
    }

    #[test]
    fn test_unrecognized_category_never_reaches_any_report() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[
                HEADER,
                "Running,2024-03-01,0:30,250,150,175",
                "Tennis,2024-03-02,0:45,180,138,168",
            ],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        let total_sessions: usize = data
            .categories
            .iter()
            .map(|c| c.stats.session_count)
            .sum();
        assert_eq!(total_sessions, 1);
        assert!(data
            .categories
            .iter()
            .flat_map(|c| &c.series)
            .all(|p| p.calories == 180.0));
    }

    #[test]
    fn test_series_is_chronological_per_category() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[
                HEADER,
                "Squash,2024-03-03,1:00,330,,",
                "Squash,2024-03-01,1:00,310,,",
                "Squash,2024-03-02,1:00,320,,",
            ],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        let labels: Vec<&str> = data.categories[0]
            .series
            .iter()
            .map(|p| p.date_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Mar 1", "Mar 2", "Mar 3"]);
    }

    #[test]
    fn test_metadata_counts_and_skips() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[
                HEADER,
                "Squash,2024-03-01,bad,300,132,150",
                "Squash,2024-03-02,0:45,200,140,170",
                "Running,2024-03-03,0:30,250,150,175",
            ],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        assert_eq!(data.metadata.rows_read, 3);
        assert_eq!(data.metadata.rows_used, 1);
        assert_eq!(data.metadata.skipped.len(), 1);
        assert_eq!(data.metadata.skipped[0].line, 2);
        assert!(!data.metadata.generated_at.is_empty());
        assert!(data.metadata.load_time_seconds >= 0.0);
        assert!(data.metadata.transform_time_seconds >= 0.0);
    }

    #[test]
    fn test_load_failure_yields_no_partial_output() {
        let missing = Path::new("/tmp/does-not-exist-workout-pipeline.csv");
        assert!(analyze_workouts(missing, &both_categories()).is_err());
    }

    #[test]
    fn test_chart_data_serializes_to_json() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "export.csv",
            &[HEADER, "Squash,2024-03-01,1:05,300,132,150"],
        );

        let data = analyze_workouts(&path, &both_categories()).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"Squash\""));
        assert!(json.contains("\"session_count\":1"));
    }
}
