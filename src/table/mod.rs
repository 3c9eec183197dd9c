//! In-memory tabular model for the cleaning pipeline.
//!
//! A [`Table`] is an ordered header list plus an ordered sequence of rows.
//! Cells are loosely typed: any column may hold strings, integers, dates,
//! or nothing at all, so every pipeline stage checks column existence
//! explicitly instead of assuming a schema.

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// A single cell value.
///
/// [`Cell::Missing`] is the sentinel for "no value" and is distinct from
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Str(String),
    Int(i64),
    Date(NaiveDate),
    Missing,
}

impl Cell {
    /// Convert a raw delimited-file field into a cell.
    ///
    /// Empty fields load as [`Cell::Missing`]; everything else is kept
    /// verbatim as a string.
    pub fn from_field(raw: &str) -> Self {
        if raw.is_empty() {
            Cell::Missing
        } else {
            Cell::Str(raw.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// String payload, if this cell holds one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Render the cell as a delimited-file field.
    ///
    /// Missing cells become the empty field; dates use `%Y-%m-%d`.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Str(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Missing => String::new(),
        }
    }

    /// JSON representation used by the debug `parse` command.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Str(s) => Value::String(s.clone()),
            Cell::Int(n) => Value::Number((*n).into()),
            Cell::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Cell::Missing => Value::Null,
        }
    }
}

/// An ordered, loosely-typed table.
///
/// Rows are kept aligned with the header list: [`Table::push_row`] pads
/// short rows with [`Cell::Missing`] and truncates long ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut [String] {
        &mut self.headers
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a new column; existing rows get [`Cell::Missing`] for it.
    pub fn add_column(&mut self, name: &str) -> usize {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(Cell::Missing);
        }
        self.headers.len() - 1
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Missing);
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<Cell>] {
        &mut self.rows
    }

    /// Consume the table, keeping only its rows.
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    /// Cell lookup by row index and column name.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let col = self.column_index(name)?;
        self.rows.get(row)?.get(col)
    }

    /// Render every row as a JSON object keyed by column name.
    pub fn to_json_rows(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let map: Map<String, Value> = self
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Cell::to_json))
                    .collect();
                Value::Object(map)
            })
            .collect()
    }
}
