use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workout_core::error::ChartError;

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let normalised = match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => "info",
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Input-path resolution ──────────────────────────────────────────────────────

/// Locate a workout export when no path was given on the command line.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `~/Downloads/workout_export.csv`
/// 2. `~/workout_export.csv`
///
/// Returns `None` when neither exists.
pub fn discover_export_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let candidates = [
        home.join("Downloads").join("workout_export.csv"),
        home.join("workout_export.csv"),
    ];
    candidates.into_iter().find(|p| p.exists())
}

/// Resolve the export path: an explicit CLI path must exist, otherwise fall
/// back to [`discover_export_path`].
pub fn resolve_input_path(cli_path: Option<&Path>) -> Result<PathBuf, ChartError> {
    if let Some(path) = cli_path {
        if !path.exists() {
            return Err(ChartError::InputNotFound(path.to_path_buf()));
        }
        return Ok(path.to_path_buf());
    }

    discover_export_path().ok_or_else(|| {
        ChartError::Config(
            "no input file given and no workout_export.csv found in the usual places"
                .to_string(),
        )
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────────
