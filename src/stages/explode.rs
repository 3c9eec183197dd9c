//! Row explosion for the multi-valued `listed_in` and `country` columns.

use crate::table::{Cell, Table};

const UNKNOWN: &str = "Unknown";

/// Explode comma-separated genres into one row per genre.
///
/// Missing `listed_in` cells default to "Unknown" (the retained source
/// column included). The exploded values land in a new `genre` column;
/// tokens that trim to the empty string also default to "Unknown".
///
/// No-op unless `listed_in` exists.
pub fn explode_genres(table: Table) -> Table {
    match table.column_index("listed_in") {
        Some(src) => explode_rows(table, src, "genre", true),
        None => table,
    }
}

/// Explode comma-separated countries into one row per country.
///
/// Same shape as [`explode_genres`], into `country_normalized`, except
/// that a missing original value substitutes the single-element list
/// `["Unknown"]` directly and empty tokens are kept as empty strings.
///
/// No-op unless `country` exists.
pub fn normalize_countries(table: Table) -> Table {
    match table.column_index("country") {
        Some(src) => explode_rows(table, src, "country_normalized", false),
        None => table,
    }
}

/// One input row with k tokens becomes k output rows, in original row
/// order with each row's expansions contiguous and in token order. All
/// other cells are duplicated across the expansions.
fn explode_rows(mut table: Table, src: usize, target: &str, default_empty_tokens: bool) -> Table {
    for row in table.rows_mut() {
        if row[src].is_missing() {
            row[src] = Cell::Str(UNKNOWN.to_string());
        }
    }
    let target_col = table.add_column(target);

    let mut exploded = Table::with_headers(table.headers().to_vec());
    for row in table.into_rows() {
        let tokens: Vec<String> = match &row[src] {
            Cell::Str(s) => s.split(',').map(|t| t.trim().to_string()).collect(),
            // Non-string source cells substitute the single-element list.
            _ => vec![UNKNOWN.to_string()],
        };

        for token in tokens {
            let mut expansion = row.clone();
            expansion[target_col] = if token.is_empty() && default_empty_tokens {
                Cell::Str(UNKNOWN.to_string())
            } else {
                Cell::Str(token)
            };
            exploded.push_row(expansion);
        }
    }

    exploded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genre_table(listed_in: Cell) -> Table {
        let mut table =
            Table::with_headers(vec!["title".to_string(), "listed_in".to_string()]);
        table.push_row(vec![Cell::Str("Dark".to_string()), listed_in]);
        table
    }

    #[test]
    fn test_genre_explosion_one_row_per_genre() {
        let table = genre_table(Cell::Str("Drama, Comedy".to_string()));
        let table = explode_genres(table);

        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "genre"), Some(&Cell::Str("Drama".to_string())));
        assert_eq!(table.cell(1, "genre"), Some(&Cell::Str("Comedy".to_string())));
        // Other cells are duplicated, the source column included.
        for row in 0..2 {
            assert_eq!(table.cell(row, "title"), Some(&Cell::Str("Dark".to_string())));
            assert_eq!(
                table.cell(row, "listed_in"),
                Some(&Cell::Str("Drama, Comedy".to_string()))
            );
        }
    }

    #[test]
    fn test_missing_genres_default_to_unknown() {
        let table = explode_genres(genre_table(Cell::Missing));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.cell(0, "listed_in"),
            Some(&Cell::Str("Unknown".to_string()))
        );
        assert_eq!(
            table.cell(0, "genre"),
            Some(&Cell::Str("Unknown".to_string()))
        );
    }

    #[test]
    fn test_empty_genre_tokens_default_to_unknown() {
        let table = explode_genres(genre_table(Cell::Str("Drama,,".to_string())));

        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, "genre"), Some(&Cell::Str("Drama".to_string())));
        assert_eq!(
            table.cell(1, "genre"),
            Some(&Cell::Str("Unknown".to_string()))
        );
        assert_eq!(
            table.cell(2, "genre"),
            Some(&Cell::Str("Unknown".to_string()))
        );
    }

    #[test]
    fn test_explosion_preserves_row_order() {
        let mut table = Table::with_headers(vec!["title".to_string(), "listed_in".to_string()]);
        table.push_row(vec![
            Cell::Str("A".to_string()),
            Cell::Str("Drama, Comedy".to_string()),
        ]);
        table.push_row(vec![
            Cell::Str("B".to_string()),
            Cell::Str("Horror".to_string()),
        ]);

        let table = explode_genres(table);
        let titles: Vec<_> = (0..table.len())
            .map(|i| table.cell(i, "title").unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, ["A", "A", "B"]);
    }

    fn country_table(country: Cell) -> Table {
        let mut table = Table::with_headers(vec!["title".to_string(), "country".to_string()]);
        table.push_row(vec![Cell::Str("Dark".to_string()), country]);
        table
    }

    #[test]
    fn test_missing_country_becomes_single_unknown_row() {
        let table = normalize_countries(country_table(Cell::Missing));

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.cell(0, "country_normalized"),
            Some(&Cell::Str("Unknown".to_string()))
        );
    }

    #[test]
    fn test_country_explosion_keeps_empty_tokens() {
        let table = normalize_countries(country_table(Cell::Str("USA, ,France".to_string())));

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.cell(0, "country_normalized"),
            Some(&Cell::Str("USA".to_string()))
        );
        // Unlike genres, empty country tokens are not defaulted.
        assert_eq!(
            table.cell(1, "country_normalized"),
            Some(&Cell::Str(String::new()))
        );
        assert_eq!(
            table.cell(2, "country_normalized"),
            Some(&Cell::Str("France".to_string()))
        );
    }

    #[test]
    fn test_no_op_without_source_column() {
        let mut table = Table::with_headers(vec!["title".to_string()]);
        table.push_row(vec![Cell::Str("Dark".to_string())]);

        let table = explode_genres(table);
        assert!(!table.has_column("genre"));

        let table = normalize_countries(table);
        assert!(!table.has_column("country_normalized"));
        assert_eq!(table.len(), 1);
    }
}
