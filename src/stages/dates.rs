//! Date parsing for the `date_added` column.

use chrono::{Datelike, NaiveDate};

use crate::table::{Cell, Table};

/// Formats seen in catalog exports, tried in order. Month-name dates
/// ("September 9, 2019") are the common case.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse `date_added` cells into calendar dates and derive `year_added`.
///
/// Cells that fail to parse become [`Cell::Missing`] in both columns.
/// No-op when the table has no `date_added` column.
pub fn parse_dates(mut table: Table) -> Table {
    let Some(date_col) = table.column_index("date_added") else {
        return table;
    };
    let year_col = table.add_column("year_added");

    for row in table.rows_mut() {
        match row[date_col].as_str().and_then(parse_date) {
            Some(date) => {
                row[date_col] = Cell::Date(date);
                row[year_col] = Cell::Int(i64::from(date.year()));
            }
            None => {
                row[date_col] = Cell::Missing;
            }
        }
    }

    table
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
