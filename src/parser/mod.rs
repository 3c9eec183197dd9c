//! Delimited-file loading with encoding and delimiter auto-detection.
//!
//! Catalog exports arrive in whatever encoding the source system used,
//! so the loader sniffs the byte stream before parsing: detect encoding,
//! decode, detect the delimiter from the header line, then hand the
//! decoded text to the CSV reader. Empty fields load as [`Cell::Missing`].

use std::fs;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::table::{Cell, Table};

/// A loaded table plus the detection metadata.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub table: Table,
    /// Detected or assumed encoding.
    pub encoding: String,
    /// Detected or explicitly requested delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the detected encoding.
///
/// Unknown encodings and invalid byte sequences fall back to lossy UTF-8,
/// so decoding never fails outright.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| String::from_utf8_lossy(bytes).to_string()),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse decoded CSV text into a [`Table`] with an explicit delimiter.
///
/// Quoted fields (embedded delimiters, newlines) are handled by the CSV
/// reader. Short records are padded with [`Cell::Missing`]; extra fields
/// beyond the header width are ignored.
pub fn load_table(content: &str, delimiter: char) -> CsvResult<Table> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }
    if !delimiter.is_ascii() {
        return Err(CsvError::Delimiter(delimiter));
    }
    let delimiter = delimiter as u8;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let width = headers.len();
    let mut table = Table::with_headers(headers);
    for record in reader.records() {
        let record = record?;
        let row: Vec<Cell> = (0..width)
            .map(|i| record.get(i).map(Cell::from_field).unwrap_or(Cell::Missing))
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

/// Load a delimited file, auto-detecting encoding and (unless overridden)
/// the delimiter.
pub fn load_file(path: &Path, delimiter: Option<char>) -> CsvResult<LoadResult> {
    let bytes = fs::read(path)?;
    load_bytes(&bytes, delimiter)
}

/// Same as [`load_file`] but for an in-memory byte buffer.
pub fn load_bytes(bytes: &[u8], delimiter: Option<char>) -> CsvResult<LoadResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let table = load_table(&content, delimiter)?;

    Ok(LoadResult {
        table,
        encoding,
        delimiter,
    })
}
