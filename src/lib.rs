//! # mediascrub - batch cleaning for media catalog CSV exports
//!
//! mediascrub ingests a flat CSV of movie/TV titles and writes a
//! cleaned, enriched copy of the same table for downstream analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Loader    │────▶│   Stages    │────▶│ Cleaned CSV │
//! │ (any enc.)  │     │ (auto-enc)  │     │ (fixed seq) │     │ (data/)     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! One batch transformation, single-threaded, whole table in memory:
//! normalize column names, parse `date_added`, derive duration/season
//! columns, explode genres and countries into one row per value, then
//! deduplicate on `(title, release_year)`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mediascrub::{clean_file, CleanOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};
//! use std::path::Path;
//!
//! let report = clean_file(
//!     Path::new(DEFAULT_INPUT),
//!     Path::new(DEFAULT_OUTPUT),
//!     &CleanOptions::default(),
//! )?;
//! println!("dropped {} duplicates", report.duplicates_removed);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - layered error types
//! - [`table`] - loosely-typed in-memory table and cells
//! - [`parser`] - CSV loading with encoding/delimiter auto-detection
//! - [`stages`] - the six cleaning stages
//! - [`pipeline`] - load-clean-write orchestration
//! - [`writer`] - CSV output

// Core modules
pub mod error;
pub mod table;

// Loading
pub mod parser;

// Cleaning
pub mod stages;

// Orchestration
pub mod pipeline;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, PipelineError, PipelineResult, WriteError, WriteResult};

// =============================================================================
// Re-exports - Table model
// =============================================================================

pub use table::{Cell, Table};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use parser::{
    decode_content, detect_delimiter, detect_encoding, load_bytes, load_file, load_table,
    LoadResult,
};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use stages::{
    dedup_titles, explode_genres, extract_duration, normalize_columns, normalize_countries,
    parse_dates, stages_description, DurationStats,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{
    clean_file, clean_table, CleanOptions, CleanOutcome, CleanReport, DEFAULT_INPUT,
    DEFAULT_OUTPUT,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::write_file;
