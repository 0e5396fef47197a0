use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A non-empty data row with its 1-based source line.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub line: u64,
    pub fields: Vec<String>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_start_matches('\u{feff}').trim().to_string()
}

pub(crate) fn read_rows<R: Read>(source: R, path: &Path) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(source);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let fields: Vec<String> = record.iter().map(normalize_cell).collect();
        if fields.iter().all(String::is_empty) {
            continue;
        }
        rows.push(Row { line, fields });
    }
    Ok(rows)
}

pub(crate) fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a comma-joined list, dropping blanks.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_and_comment_rows_and_strips_bom() {
        let data = "\u{feff}a;b\n\n# comment\n;;\n c ; d \n";
        let rows = read_rows(data.as_bytes(), Path::new("inline.csv")).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b"]);
        assert_eq!(rows[1].fields, vec!["c", "d"]);
    }

    #[test]
    fn splits_lists() {
        assert_eq!(split_list("cough, fever,, rash "), vec!["cough", "fever", "rash"]);
        assert!(split_list(" ").is_empty());
    }
}
