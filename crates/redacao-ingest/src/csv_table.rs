use std::borrow::Cow;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use redacao_model::Table;

use crate::error::Result;

/// Ingestion knobs. Everything defaults to auto-detection; the INEP
/// microdata ships semicolon-separated Latin-1, while exported subsets
/// are usually comma-separated UTF-8, so both get sniffed per file.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestOptions {
    /// Field delimiter; `None` sniffs the header line.
    pub delimiter: Option<u8>,
}

/// A parsed dataset plus what detection settled on, so exports can
/// reuse the same delimiter.
#[derive(Debug, Clone)]
pub struct LoadedCsv {
    pub table: Table,
    pub delimiter: u8,
    pub encoding: &'static str,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Decode raw bytes as UTF-8 when valid, otherwise Latin-1.
fn decode(bytes: &[u8]) -> (Cow<'_, str>, &'static str) {
    let bytes = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), "utf-8"),
        Err(_) => {
            let (text, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
            (text, "windows-1252")
        }
    }
}

/// Pick the delimiter that splits the header line into more fields.
fn sniff_delimiter(text: &str) -> u8 {
    let header_line = text.lines().next().unwrap_or("");
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

/// Read a delimited text file into a [`Table`].
///
/// Headers are whitespace/BOM-normalized, fully blank lines are
/// skipped, and short records are padded with missing cells. A
/// duplicate header name is an error; an empty file is not.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<LoadedCsv> {
    let bytes = fs::read(path)?;
    let (text, encoding) = decode(&bytes);
    let delimiter = options.delimiter.unwrap_or_else(|| sniff_delimiter(&text));

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record?.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut rows = raw_rows.into_iter();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|value| normalize_header(value)).collect())
        .unwrap_or_default();
    let mut table = Table::new(headers)?;
    for row in rows {
        table.push_row(row);
    }

    let delimiter_char = delimiter as char;
    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.headers.len(),
        delimiter = %delimiter_char,
        encoding,
        "loaded csv table"
    );
    Ok(LoadedCsv {
        table,
        delimiter,
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_semicolon_headers() {
        assert_eq!(sniff_delimiter("A;B;C\n1;2;3"), b';');
        assert_eq!(sniff_delimiter("A,B,C"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn decode_prefers_utf8() {
        let (text, encoding) = decode("Vitória".as_bytes());
        assert_eq!(text, "Vitória");
        assert_eq!(encoding, "utf-8");
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        let (text, encoding) = decode(b"Vit\xF3ria");
        assert_eq!(text, "Vitória");
        assert_eq!(encoding, "windows-1252");
    }

    #[test]
    fn normalize_header_collapses_whitespace() {
        assert_eq!(normalize_header("  NO_MUNICIPIO_PROVA  "), "NO_MUNICIPIO_PROVA");
        assert_eq!(normalize_header("nota\t final"), "nota final");
        assert_eq!(normalize_header("\u{feff}ID"), "ID");
    }
}
