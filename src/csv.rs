// src/csv.rs
// Rewrite reports as CSV/TSV. std-only writer.
use std::io::{self, Write};

use crate::dom::Rewrite;

pub const REPORT_HEADERS: [&str; 5] = ["Source", "Index", "Before", "After", "Parsed"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One report row per rewrite, prefixed with the source it came from.
pub fn report_rows(source: &str, rewrites: &[Rewrite]) -> Vec<Vec<String>> {
    rewrites
        .iter()
        .map(|r| {
            let mut row = Vec::with_capacity(REPORT_HEADERS.len());
            row.push(s!(source));
            row.extend(r.to_row());
            row
        })
        .collect()
}

pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
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

pub fn report_headers() -> Option<Vec<String>> {
    Some(REPORT_HEADERS.iter().map(|h| s!(*h)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a"), s!("$  1,234.0000"), s!("say \"hi\"")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"$  1,234.0000\",\"say \"\"hi\"\"\"\n");

        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a"), s!("$  1,234.0000")], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\t$  1,234.0000\n");
    }

    #[test]
    fn report_has_source_column() {
        let rw = vec![Rewrite { index: 0, before: s!("5"), after: s!("$          5.0000"), parsed: true }];
        let rows = report_rows("page.html", &rw);
        let txt = rows_to_string(&rows, &report_headers(), '\t');
        assert_eq!(txt, "Source\tIndex\tBefore\tAfter\tParsed\npage.html\t0\t5\t$          5.0000\tyes\n");
    }
}
