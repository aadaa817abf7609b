//! Chart series construction.
//!
//! A thin projection over the category-filtered sequence: the parser already
//! guarantees chronological order, so this only formats the date label and
//! fills in the per-point values the chart needs.

use workout_core::models::{SeriesPoint, WorkoutRecord};

/// Date label layout for the x-axis, e.g. `"Mar 1"`.
const DATE_LABEL_FORMAT: &str = "%b %-d";

/// Project a sorted, filtered record slice into chart-ready points.
///
/// One point per session, in input order. Absent calories or heart rate
/// become 0.0 so every point is plottable.
pub fn build_series(records: &[WorkoutRecord]) -> Vec<SeriesPoint> {
    records
        .iter()
        .map(|r| SeriesPoint {
            date_label: r.date.format(DATE_LABEL_FORMAT).to_string(),
            calories: r.calories.unwrap_or(0.0),
            max_heart_rate: r.max_heart_rate.unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(day: u32, calories: Option<f64>) -> WorkoutRecord {
        WorkoutRecord {
            category: "Squash".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            duration_minutes: 60,
            calories,
            avg_heart_rate: None,
            max_heart_rate: Some(150.0),
        }
    }

    #[test]
    fn test_one_point_per_record_in_input_order() {
        let records = vec![make_record(1, Some(300.0)), make_record(2, Some(200.0))];
        let series = build_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date_label, "Mar 1");
        assert_eq!(series[1].date_label, "Mar 2");
        assert_eq!(series[0].calories, 300.0);
        assert_eq!(series[1].calories, 200.0);
    }

    #[test]
    fn test_absent_values_become_zero() {
        let mut record = make_record(5, None);
        record.max_heart_rate = None;
        let series = build_series(&[record]);
        assert_eq!(series[0].calories, 0.0);
        assert_eq!(series[0].max_heart_rate, 0.0);
    }

    #[test]
    fn test_heart_rate_carried_for_overlays() {
        let series = build_series(&[make_record(1, Some(300.0))]);
        assert_eq!(series[0].max_heart_rate, 150.0);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(build_series(&[]).is_empty());
    }
}
