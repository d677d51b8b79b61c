// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Byte-order mark prepended to catalog CSV files so spreadsheet tools
/// pick up the UTF-8 encoding of the Korean text.
pub const UTF8_BOM: &str = "\u{feff}";

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single comma-separated row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, ",")?; } else { first = false; }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Full file contents: BOM, header row, one row per record.
pub fn to_csv_string(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write!(buf, "{}", UTF8_BOM);
    let _ = write_row(&mut buf, headers);
    for r in rows {
        let _ = write_row(&mut buf, r);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant), used to read exports back
/// in tests. A leading BOM is skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
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
            ',' if !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
