//! Duration extraction: minutes for movies, season counts for TV shows.

use crate::table::{Cell, Table};

/// Parse-failure counters surfaced in the pipeline report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DurationStats {
    /// Movie rows whose duration had no leading integer token.
    pub movie_failures: usize,
    /// TV-show rows whose duration had no leading integer token.
    pub season_failures: usize,
}

/// Derive `duration_minutes` and `seasons` from `duration` + `type`.
///
/// The `type` comparison is trimmed and case-insensitive. Rows matching
/// neither kind, or with a missing duration, get [`Cell::Missing`] in
/// both derived columns. Unparseable tokens also coerce to missing and
/// are counted in [`DurationStats`].
///
/// No-op unless both `duration` and `type` columns exist.
pub fn extract_duration(mut table: Table) -> (Table, DurationStats) {
    let mut stats = DurationStats::default();
    let (Some(duration_col), Some(type_col)) =
        (table.column_index("duration"), table.column_index("type"))
    else {
        return (table, stats);
    };

    let minutes_col = table.add_column("duration_minutes");
    let seasons_col = table.add_column("seasons");

    for row in table.rows_mut() {
        let kind = row[type_col].as_str().map(|s| s.trim().to_lowercase());
        let raw = row[duration_col].as_str().map(str::to_string);

        match (kind.as_deref(), raw) {
            (Some("movie"), Some(raw)) => match leading_int(&raw) {
                Some(minutes) => row[minutes_col] = Cell::Int(minutes),
                None => stats.movie_failures += 1,
            },
            (Some("tv show"), Some(raw)) => match leading_int(&raw) {
                Some(seasons) => row[seasons_col] = Cell::Int(seasons),
                None => stats.season_failures += 1,
            },
            _ => {}
        }
    }

    (table, stats)
}

/// First whitespace-delimited token, parsed as an integer in its entirety.
fn leading_int(raw: &str) -> Option<i64> {
    raw.split_whitespace().next()?.parse().ok()
}
