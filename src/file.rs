// src/file.rs

use std::{
    fs,
    io,
    path::Path,
};

use crate::config::consts::FIELD_NAME;
use crate::csv::{parse_rows, rows_to_string};
use crate::data::{ProductRecord, SourceTable};
use crate::error::SourceError;

/// Read a delimited source file. First row is the header; every other row
/// becomes a record keyed by it. A `name` column is required.
pub fn read_source(path: &Path, sep: char) -> Result<SourceTable, SourceError> {
    let text = fs::read_to_string(path)
        .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;
    parse_source(path, &text, sep)
}

/// `read_source` without the I/O; `path` is only used in errors.
pub fn parse_source(path: &Path, text: &str, sep: char) -> Result<SourceTable, SourceError> {
    // Excel likes to prepend a BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = parse_rows(text, sep).into_iter();
    let headers = rows
        .next()
        .ok_or_else(|| SourceError::Empty { path: path.to_path_buf() })?;

    if !headers.iter().any(|h| h == FIELD_NAME) {
        return Err(SourceError::MissingName { path: path.to_path_buf() });
    }

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        if row.len() != headers.len() {
            return Err(SourceError::RowWidth {
                path: path.to_path_buf(),
                row: i + 2, // 1-based, after the header
                expected: headers.len(),
                found: row.len(),
            });
        }
        records.push(ProductRecord::from_pairs(headers.iter().cloned().zip(row)));
    }

    logd!(path = %path.display(), records = records.len(), "source loaded");
    Ok(SourceTable { headers, records })
}

/// Write the result table in one go. The parent directory is created if needed.
pub fn write_result(path: &Path, table: &SourceTable, sep: char) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = table.output_headers();
    let contents = rows_to_string(Some(headers.as_slice()), &table.output_rows(), sep);
    fs::write(path, contents)?;

    logf!(path = %path.display(), records = table.records.len(), "result written");
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
