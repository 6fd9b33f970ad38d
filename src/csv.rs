// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). Blank lines are skipped;
/// a line holding only `""` is a record with one empty field.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut quoted = false; // current row had a quote
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                quoted = true;
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if is_blank(&row, quoted) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
                quoted = false;
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    row.push(field);
    if !is_blank(&row, quoted) {
        rows.push(row);
    }

    rows
}

fn is_blank(row: &[String], quoted: bool) -> bool {
    !quoted && row.len() == 1 && row[0].is_empty()
}

/* ---------------- Writing ---------------- */

/// Separator, quote, or any whitespace forces quoting.
fn needs_quotes(field: &str, sep: char) -> bool {
    field.chars().any(|c| c == sep || c == '"' || c.is_whitespace())
}

/// Encode one field, quoting and doubling inner quotes when needed.
pub fn encode_field(field: &str, sep: char) -> String {
    if needs_quotes(field, sep) {
        join!("\"", &field.replace('"', "\"\""), "\"")
    } else {
        s!(field)
    }
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    // A lone empty cell would otherwise read back as a blank line.
    if let [only] = row {
        if only.is_empty() {
            return writeln!(w, "\"\"");
        }
    }
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        write!(w, "{}", encode_field(cell, sep))?;
    }
    writeln!(w)
}

/// Header line (if any) followed by rows, as one string.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
