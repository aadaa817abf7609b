//! Runtime layer for Workout Charts.
//!
//! Owns the published result set between the data pipeline and the
//! presentation layer.

pub mod store;

pub use workout_core as core;
pub use workout_data as data;
