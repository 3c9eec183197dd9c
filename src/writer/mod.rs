//! Persist a cleaned table back to a comma-delimited file.

use std::fs;
use std::path::Path;

use crate::error::WriteResult;
use crate::table::{Cell, Table};

/// Write the table to `path`, creating parent directories as needed.
///
/// The header row matches the table's final column order. Missing cells
/// are written as empty fields; quoting is handled by the CSV writer.
pub fn write_file(table: &Table, path: &Path) -> WriteResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(Cell::to_field))?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::load_file;
    use chrono::NaiveDate;

    fn sample() -> Table {
        let mut table = Table::with_headers(vec![
            "title".to_string(),
            "date_added".to_string(),
            "year_added".to_string(),
        ]);
        table.push_row(vec![
            Cell::Str("Love, Actually".to_string()),
            Cell::Date(NaiveDate::from_ymd_opt(2019, 9, 9).unwrap()),
            Cell::Int(2019),
        ]);
        table.push_row(vec![
            Cell::Str("Dark".to_string()),
            Cell::Missing,
            Cell::Missing,
        ]);
        table
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("out.csv");

        write_file(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample();

        write_file(&table, &path).unwrap();
        let reloaded = load_file(&path, None).unwrap().table;

        assert_eq!(reloaded.headers(), table.headers());
        assert_eq!(reloaded.len(), table.len());
        // Values survive modulo string representation; quoting protected
        // the embedded comma.
        assert_eq!(
            reloaded.cell(0, "title"),
            Some(&Cell::Str("Love, Actually".to_string()))
        );
        assert_eq!(
            reloaded.cell(0, "date_added"),
            Some(&Cell::Str("2019-09-09".to_string()))
        );
        assert_eq!(
            reloaded.cell(0, "year_added"),
            Some(&Cell::Str("2019".to_string()))
        );
        // Missing cells come back as missing, not as empty strings.
        assert_eq!(reloaded.cell(1, "date_added"), Some(&Cell::Missing));
    }
}
