//! Data ingestion layer for Workout Charts.
//!
//! Responsible for reading the CSV export, parsing rows into typed workout
//! records, filtering by category, aggregating per-category statistics,
//! building chart series and running the top-level pipeline.

pub mod aggregator;
pub mod filter;
pub mod pipeline;
pub mod reader;
pub mod series;

pub use workout_core as core;
