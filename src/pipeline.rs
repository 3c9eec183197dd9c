//! High-level pipeline API: load, clean, write.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediascrub::{clean_file, CleanOptions};
//! use std::path::Path;
//!
//! let report = clean_file(
//!     Path::new("Netflix Dataset.csv"),
//!     Path::new("data/netflix_cleaned.csv"),
//!     &CleanOptions::default(),
//! )?;
//! println!("kept {} rows", report.rows_written);
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};
use crate::parser;
use crate::stages::{self, DurationStats};
use crate::table::Table;
use crate::writer;

/// Default input path: the raw catalog export next to the binary's
/// working directory.
pub const DEFAULT_INPUT: &str = "Netflix Dataset.csv";

/// Default output path; the `data/` directory is created when absent.
pub const DEFAULT_OUTPUT: &str = "data/netflix_cleaned.csv";

/// Options for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Override delimiter auto-detection.
    pub delimiter: Option<char>,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Detected input encoding.
    pub encoding: String,
    /// Delimiter used for the input.
    pub delimiter: char,
    /// Rows in the raw input.
    pub rows_loaded: usize,
    /// Rows after genre and country explosion.
    pub rows_exploded: usize,
    /// Rows removed by deduplication.
    pub duplicates_removed: usize,
    /// Movie durations that did not parse (coerced to missing).
    pub movie_duration_failures: usize,
    /// Season counts that did not parse (coerced to missing).
    pub season_failures: usize,
    /// Rows in the written output.
    pub rows_written: usize,
    /// Where the cleaned file landed.
    pub output: PathBuf,
}

/// Result of running the in-memory stage sequence.
#[derive(Debug)]
pub struct CleanOutcome {
    pub table: Table,
    pub rows_exploded: usize,
    pub duplicates_removed: usize,
    pub duration: DurationStats,
}

/// Run the cleaning stages over an in-memory table, no I/O.
///
/// Stage order is fixed; note that deduplication runs after explosion,
/// so a duplicated title keeps only its first exploded combination.
pub fn clean_table(table: Table) -> CleanOutcome {
    let table = stages::normalize_columns(table);
    let table = stages::parse_dates(table);
    let (table, duration) = stages::extract_duration(table);
    let table = stages::explode_genres(table);
    let table = stages::normalize_countries(table);
    let rows_exploded = table.len();
    let (table, duplicates_removed) = stages::dedup_titles(table);

    CleanOutcome {
        table,
        rows_exploded,
        duplicates_removed,
        duration,
    }
}

/// Full pipeline: load `input`, clean, write to `output`.
///
/// Fails with [`PipelineError::InputNotFound`] (naming the expected
/// path) when the input does not exist.
pub fn clean_file(
    input: &Path,
    output: &Path,
    options: &CleanOptions,
) -> PipelineResult<CleanReport> {
    if !input.exists() {
        return Err(PipelineError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let loaded = parser::load_file(input, options.delimiter)?;
    let rows_loaded = loaded.table.len();

    let outcome = clean_table(loaded.table);
    writer::write_file(&outcome.table, output)?;

    Ok(CleanReport {
        encoding: loaded.encoding,
        delimiter: loaded.delimiter,
        rows_loaded,
        rows_exploded: outcome.rows_exploded,
        duplicates_removed: outcome.duplicates_removed,
        movie_duration_failures: outcome.duration.movie_failures,
        season_failures: outcome.duration.season_failures,
        rows_written: outcome.table.len(),
        output: output.to_path_buf(),
    })
}
