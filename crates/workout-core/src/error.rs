use std::path::PathBuf;
use thiserror::Error;

/// All load-level errors produced by the workout pipeline.
///
/// Row-level problems (bad duration, bad date) are deliberately not here:
/// those are recovered by skipping the row and recording a
/// [`RowError`](crate::models::RowError) instead.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The export file could not be opened or read from disk.
    #[error("Failed to read export file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV table structure itself is malformed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("Missing required column \"{0}\" in header")]
    MissingColumn(String),

    /// The resolved input path does not exist.
    #[error("Export file not found: {0}")]
    InputNotFound(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the workout crates.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ChartError::FileRead {
            path: PathBuf::from("/some/export.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read export file"));
        assert!(msg.contains("/some/export.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = ChartError::MissingColumn("Duration".to_string());
        assert_eq!(err.to_string(), "Missing required column \"Duration\" in header");
    }

    #[test]
    fn test_error_display_input_not_found() {
        let err = ChartError::InputNotFound(PathBuf::from("/missing/export.csv"));
        assert_eq!(err.to_string(), "Export file not found: /missing/export.csv");
    }

    #[test]
    fn test_error_display_config() {
        let err = ChartError::Config("no categories configured".to_string());
        assert_eq!(err.to_string(), "Configuration error: no categories configured");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ChartError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_csv() {
        // Force a csv::Error by reading records with mismatched lengths
        // through a strict reader.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(false)
            .from_reader("a,b\n1,2,3\n".as_bytes());
        let record_err = reader
            .records()
            .next()
            .unwrap()
            .expect_err("row wider than header must error");
        let err: ChartError = record_err.into();
        assert!(err.to_string().contains("Failed to parse CSV"));
    }
}
