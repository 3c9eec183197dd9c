//! Error types for the mediascrub cleaning pipeline.
//!
//! The hierarchy mirrors the pipeline's layers:
//!
//! - [`CsvError`] - loader failures (I/O, decoding, malformed CSV)
//! - [`WriteError`] - writer failures (directories, serialization)
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across layer boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors while loading a delimited file into a [`crate::table::Table`].
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// The file contained no content at all.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A header row was expected but not found.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// The requested delimiter cannot be used by the reader.
    #[error("Unsupported delimiter '{0}' (must be a single ASCII character)")]
    Delimiter(char),
}

// =============================================================================
// Writer Errors
// =============================================================================

/// Errors while persisting a cleaned table.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the output directory or flush the file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("Failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::clean_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input file does not exist at the expected path.
    #[error("Raw CSV not found at {}. Make sure the catalog export exists before running the pipeline.", path.display())]
    InputNotFound { path: PathBuf },

    /// Loader error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Writer error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loader operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // WriteError -> PipelineError
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let pipeline_err: PipelineError = WriteError::from(io_err).into();
        assert!(pipeline_err.to_string().contains("denied"));
    }

    #[test]
    fn test_input_not_found_names_path() {
        let err = PipelineError::InputNotFound {
            path: PathBuf::from("Netflix Dataset.csv"),
        };
        assert!(err.to_string().contains("Netflix Dataset.csv"));
    }
}
