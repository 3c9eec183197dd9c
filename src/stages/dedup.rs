//! Duplicate removal on the `(title, release_year)` key.

use std::collections::HashSet;

use crate::table::{Cell, Table};

/// Drop every row after the first for each `(title, release_year)` pair.
///
/// Keys compare by exact cell equality, so missing values group
/// together. This runs after row explosion, which means a title keeps
/// only whichever exploded genre/country combination appears first in
/// row order. Returns the number of rows removed.
///
/// No-op unless both `title` and `release_year` exist.
pub fn dedup_titles(table: Table) -> (Table, usize) {
    let (Some(title_col), Some(year_col)) = (
        table.column_index("title"),
        table.column_index("release_year"),
    ) else {
        return (table, 0);
    };

    let before = table.len();
    let mut seen: HashSet<(Cell, Cell)> = HashSet::new();
    let mut deduped = Table::with_headers(table.headers().to_vec());

    for row in table.into_rows() {
        let key = (row[title_col].clone(), row[year_col].clone());
        if seen.insert(key) {
            deduped.push_row(row);
        }
    }

    let removed = before - deduped.len();
    (deduped, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(rows: Vec<(Cell, Cell, &str)>) -> Table {
        let mut table = Table::with_headers(vec![
            "title".to_string(),
            "release_year".to_string(),
            "genre".to_string(),
        ]);
        for (title, year, genre) in rows {
            table.push_row(vec![title, year, Cell::Str(genre.to_string())]);
        }
        table
    }

    #[test]
    fn test_keeps_first_occurrence() {
        let table = table_of(vec![
            (
                Cell::Str("Dark".to_string()),
                Cell::Str("2017".to_string()),
                "Drama",
            ),
            (
                Cell::Str("Dark".to_string()),
                Cell::Str("2017".to_string()),
                "Thriller",
            ),
        ]);

        let (table, removed) = dedup_titles(table);
        assert_eq!(removed, 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "genre"), Some(&Cell::Str("Drama".to_string())));
    }

    #[test]
    fn test_different_years_are_distinct() {
        let table = table_of(vec![
            (
                Cell::Str("Remake".to_string()),
                Cell::Str("1999".to_string()),
                "Drama",
            ),
            (
                Cell::Str("Remake".to_string()),
                Cell::Str("2020".to_string()),
                "Drama",
            ),
        ]);

        let (table, removed) = dedup_titles(table);
        assert_eq!(removed, 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_keys_group_together() {
        let table = table_of(vec![
            (Cell::Missing, Cell::Missing, "Drama"),
            (Cell::Missing, Cell::Missing, "Comedy"),
        ]);

        let (table, removed) = dedup_titles(table);
        assert_eq!(removed, 1);
        assert_eq!(table.cell(0, "genre"), Some(&Cell::Str("Drama".to_string())));
    }

    #[test]
    fn test_no_op_without_key_columns() {
        let mut table = Table::with_headers(vec!["title".to_string()]);
        table.push_row(vec![Cell::Str("Dark".to_string())]);
        table.push_row(vec![Cell::Str("Dark".to_string())]);

        let (table, removed) = dedup_titles(table);
        assert_eq!(removed, 0);
        assert_eq!(table.len(), 2);
    }
}
