//! Category filtering over the parsed record sequence.

use workout_core::models::WorkoutRecord;

/// Return the records belonging to `category`, preserving relative order.
///
/// Pure: empty input or no matches yields an empty vector, never an error.
/// Filtering an already single-category sequence by the same label is a
/// no-op.
pub fn filter_by_category(records: &[WorkoutRecord], category: &str) -> Vec<WorkoutRecord> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}
