use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Per-category workout statistics and chart series from a CSV export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "workout-charts",
    about = "Per-category workout statistics and chart series from a CSV export",
    version
)]
pub struct Settings {
    /// Path to the workout CSV export (discovered in the usual places when omitted)
    pub input: Option<PathBuf>,

    /// Activity category to report on (repeatable)
    #[arg(long = "category", default_values_t = default_categories())]
    pub categories: Vec<String>,

    /// Emit the full result set as JSON instead of text tables
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

/// The two activity categories reported on by default.
pub fn default_categories() -> Vec<String> {
    vec!["Squash".to_string(), "Tennis".to_string()]
}

impl Settings {
    /// Validate settings that clap cannot express declaratively.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.categories.is_empty() {
            return Err(crate::error::ChartError::Config(
                "at least one --category is required".to_string(),
            ));
        }
        Ok(())
    }
}
