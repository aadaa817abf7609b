//! Per-category statistics over a filtered record sequence.

use workout_core::models::{CategoryStats, WorkoutRecord};

/// Compute [`CategoryStats`] for one category's records.
///
/// Pure and order-independent: sums and max are commutative, so any
/// permutation of `records` yields identical stats.
///
/// The calorie average is taken over the records that carry a calorie value;
/// records without one still count toward `session_count`. An empty slice,
/// or one where every record lacks calories, returns the zero-state without
/// ever dividing.
pub fn aggregate(records: &[WorkoutRecord]) -> CategoryStats {
    if records.is_empty() {
        return CategoryStats::default();
    }

    let total_duration_minutes: u32 = records.iter().map(|r| r.duration_minutes).sum();

    let calorie_sum: f64 = records.iter().filter_map(|r| r.calories).sum();
    let calorie_count = records.iter().filter(|r| r.calories.is_some()).count();
    let avg_calories = if calorie_count == 0 {
        0
    } else {
        (calorie_sum / calorie_count as f64).round() as i64
    };

    let max_heart_rate = records
        .iter()
        .map(|r| r.max_heart_rate.unwrap_or(0.0))
        .fold(0.0, f64::max);

    CategoryStats {
        session_count: records.len(),
        total_duration_minutes,
        avg_calories,
        max_heart_rate,
    }
}
