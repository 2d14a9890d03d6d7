// src/reader.rs

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{ReadError, Result};

/// Open `path` as a CSV reader.
///
/// Flexible mode tolerates rows whose cell count differs from the header;
/// short rows read as empty strings at the missing positions instead of
/// aborting the scan.
fn open(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(csv::ReaderBuilder::new().flexible(true).from_reader(file))
}

fn header_row(reader: &mut csv::Reader<File>, path: &Path) -> Result<Vec<String>> {
    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(ReadError::Empty(path.to_path_buf()));
    }
    Ok(headers.iter().map(String::from).collect())
}

/// Column names of the file's header row, in file order.
///
/// Only the first row is parsed; the rest of the file is never read.
pub fn list_columns(path: &Path) -> Result<Vec<String>> {
    let mut reader = open(path)?;
    header_row(&mut reader, path)
}

/// The first `n` values of `column`, in file order.
///
/// `column` must match a header entry exactly (case-sensitive). The scan
/// stops as soon as `n` values are collected, so files longer than `n`
/// rows are only partially read. Returns fewer than `n` values when the
/// file runs out of data rows, and an empty vector when `n == 0`.
pub fn first_values(path: &Path, column: &str, n: usize) -> Result<Vec<String>> {
    let mut reader = open(path)?;
    let headers = header_row(&mut reader, path)?;

    let index = headers
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| ReadError::ColumnNotFound {
            column: column.to_string(),
            available: headers,
        })?;

    let mut values = Vec::new();
    for record in reader.records().take(n) {
        let record = record?;
        values.push(record.get(index).unwrap_or("").to_string());
    }
    Ok(values)
}
