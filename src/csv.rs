// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Records ---------------- */

/// One data row: ordered (header, value) pairs as they appeared in the
/// source. Headers stay source-literal here; alias matching is the
/// resolver's job (`specs::fields`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Keys in original column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// (key, value) pairs in original column order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value for an exact (source-literal) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keep only columns whose key satisfies `pred`, preserving order.
    pub fn retain_keys<F: Fn(&str) -> bool>(&mut self, pred: F) {
        self.fields.retain(|(k, _)| pred(k));
    }
}

/* ---------------- Delimiter detection ---------------- */

/// Separator of the legacy sample format.
pub const PIPE_SEP: &str = " | ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Pipe,
    Csv,
}

/// Decide the grammar from the first non-empty line. A bare '|' does not
/// count; only the spaced form marks the legacy format. Defaults to CSV.
pub fn detect_delim(text: &str) -> Delim {
    let first = text.lines().find(|l| !l.is_empty()).unwrap_or("");
    if first.contains(PIPE_SEP) { Delim::Pipe } else { Delim::Csv }
}

pub fn parse_records(text: &str, delim: Delim) -> Vec<Record> {
    match delim {
        Delim::Pipe => parse_pipe(text),
        Delim::Csv => parse_csv(text),
    }
}

/* ---------------- Pipe variant ---------------- */

/// Legacy sample format: " | "-separated, one row per non-empty line.
/// First line is the header; short rows pad with empty strings.
pub fn parse_pipe(text: &str) -> Vec<Record> {
    let mut lines = text.lines().filter(|l| !l.is_empty());

    let header: Vec<String> = match lines.next() {
        Some(l) => l.split(PIPE_SEP).map(|s| s!(s.trim())).collect(),
        None => return Vec::new(),
    };

    let mut out = Vec::new();
    for line in lines {
        let parts: Vec<&str> = line.split(PIPE_SEP).collect();
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), s!(parts.get(i).map(|p| p.trim()).unwrap_or(""))))
            .collect();
        out.push(Record::new(fields));
    }
    out
}

/* ---------------- Quoted-CSV variant ---------------- */

/// Character-level scanner: double-quote wrapped fields, "" as an escaped
/// quote, unquoted '\r' skipped, and the final field/row flushed even
/// without a trailing newline. Deliberately literal: a stray trailing
/// newline yields one row of empty fields, and the name filter upstream
/// deals with it.
fn scan_csv_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled quote → literal quote
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => row.push(take(&mut field)),
            '\n' => {
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            '\r' => {}
            _ => field.push(ch),
        }
    }

    // Flush the trailing field/row, unterminated quotes included.
    row.push(field);
    rows.push(row);

    rows
}

/// CSV text → Records. The first scanned row is the header (trimmed); data
/// rows zip positionally with values trimmed and out-of-range fields empty.
pub fn parse_csv(text: &str) -> Vec<Record> {
    let mut rows = scan_csv_rows(text).into_iter();

    let header: Vec<String> = match rows.next() {
        Some(h) => h.iter().map(|s| s!(s.trim())).collect(),
        None => return Vec::new(),
    };

    rows.map(|row| {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), s!(row.get(i).map(|v| v.trim()).unwrap_or(""))))
            .collect();
        Record::new(fields)
    })
    .collect()
}

/* ---------------- Writing ---------------- */

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

/// Create a full export string: optional header line plus one line per row.
pub fn to_export_string(
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_round_trips_quoted_field() {
        let rows = scan_csv_rows("\"a, \"\"b\"\" c\"");
        assert_eq!(rows, vec![vec![s!(r#"a, "b" c"#)]]);
    }

    #[test]
    fn scanner_flushes_final_row_without_newline() {
        let rows = scan_csv_rows("a,b\nc,d");
        assert_eq!(rows, vec![vec![s!("a"), s!("b")], vec![s!("c"), s!("d")]]);
    }

    #[test]
    fn scanner_keeps_quoted_newlines() {
        let rows = scan_csv_rows("\"x\ny\",z");
        assert_eq!(rows, vec![vec![s!("x\ny"), s!("z")]]);
    }

    #[test]
    fn write_row_quotes_on_demand() {
        let mut buf: Vec<u8> = Vec::new();
        let row = vec![s!("plain"), s!("a,b"), s!("say \"hi\"")];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn export_string_honors_header_toggle() {
        let headers = vec![s!("A"), s!("B")];
        let rows = vec![vec![s!("1"), s!("2")]];
        let with = to_export_string(Some(&headers), &rows, true, ',');
        let without = to_export_string(Some(&headers), &rows, false, ',');
        assert_eq!(with, "A,B\n1,2\n");
        assert_eq!(without, "1,2\n");
    }
}
