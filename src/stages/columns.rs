//! Column name normalization.

use crate::table::Table;

/// Trim, lowercase, and underscore-join every column name.
///
/// Idempotent: later stages rely on the normalized names, so this always
/// runs first.
pub fn normalize_columns(mut table: Table) -> Table {
    for name in table.headers_mut() {
        *name = normalize_name(name);
    }
    table
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Release Year "), "release_year");
        assert_eq!(normalize_name("Show ID"), "show_id");
        assert_eq!(normalize_name("title"), "title");
        assert_eq!(normalize_name("Listed In"), "listed_in");
    }

    #[test]
    fn test_interior_spaces_all_replaced() {
        assert_eq!(normalize_name("Date  Added"), "date__added");
    }

    #[test]
    fn test_normalize_columns_is_idempotent() {
        let table = Table::with_headers(vec![
            " Title".to_string(),
            "Date Added".to_string(),
            "TYPE".to_string(),
        ]);

        let once = normalize_columns(table);
        assert_eq!(once.headers(), &["title", "date_added", "type"]);

        let twice = normalize_columns(once.clone());
        assert_eq!(twice.headers(), once.headers());
    }
}
