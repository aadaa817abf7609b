//! Domain types and shared helpers for Workout Charts.
//!
//! Holds the parsed record and statistics models, the `"H:MM"` duration
//! helpers, the error taxonomy and the CLI settings. Contains no I/O.

pub mod duration;
pub mod error;
pub mod models;
pub mod settings;
