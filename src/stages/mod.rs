//! Cleaning stages, applied in a fixed order by the pipeline:
//!
//! 1. [`normalize_columns`] - trim/lowercase/underscore column names
//! 2. [`parse_dates`] - `date_added` to dates, derive `year_added`
//! 3. [`extract_duration`] - `duration_minutes` and `seasons`
//! 4. [`explode_genres`] - one row per `listed_in` genre
//! 5. [`normalize_countries`] - one row per `country` entry
//! 6. [`dedup_titles`] - drop later `(title, release_year)` duplicates
//!
//! Every stage is a pure table-to-table function that degrades to a
//! no-op when its required column(s) are absent.

pub mod columns;
pub mod dates;
pub mod dedup;
pub mod duration;
pub mod explode;

pub use columns::normalize_columns;
pub use dates::parse_dates;
pub use dedup::dedup_titles;
pub use duration::{extract_duration, DurationStats};
pub use explode::{explode_genres, normalize_countries};

/// Human-readable stage listing for the `stages` CLI command.
pub fn stages_description() -> String {
    r#"Cleaning stages, in execution order:

| Stage | Requires | Effect |
|-------|----------|--------|
| normalize_columns | - | trim, lowercase, spaces to underscores |
| parse_dates | date_added | parse dates, derive year_added |
| extract_duration | duration + type | duration_minutes (movies), seasons (tv shows) |
| explode_genres | listed_in | one row per genre, new column genre |
| normalize_countries | country | one row per country, new column country_normalized |
| dedup_titles | title + release_year | keep first (title, release_year) occurrence |

A stage whose required column(s) are missing is skipped entirely."#
        .to_string()
}
