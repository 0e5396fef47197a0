use std::io::Read;
use std::path::Path;

use medsynth_model::{Gender, NameEntry, NameTables};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::reader::{open, read_rows};

/// Parses `value;weight[;gender]` rows. A missing weight counts as 1.
pub fn parse_name_table<R: Read>(source: R, path: &Path) -> Result<Vec<NameEntry>> {
    let invalid = |field: &str, value: &str, line: u64| IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        path: path.to_path_buf(),
        line,
    };

    let mut entries = Vec::new();
    for row in read_rows(source, path)? {
        let Some(value) = row.fields.first().filter(|v| !v.is_empty()).cloned() else {
            continue;
        };
        let weight = match row.fields.get(1).map(String::as_str) {
            None | Some("") => 1.0,
            Some(raw) => raw
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w >= 0.0)
                .ok_or_else(|| invalid("weight", raw, row.line))?,
        };
        let gender = match row.fields.get(2).map(String::as_str) {
            None | Some("") => None,
            Some(raw) => Some(Gender::parse(raw).ok_or_else(|| invalid("gender", raw, row.line))?),
        };
        entries.push(NameEntry::new(value, weight, gender));
    }
    if entries.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

pub fn load_name_table(path: &Path) -> Result<Vec<NameEntry>> {
    parse_name_table(open(path)?, path)
}

pub fn load_name_tables(
    surnames: &Path,
    first_names: &Path,
    patronymics: &Path,
) -> Result<NameTables> {
    let tables = NameTables {
        surnames: load_name_table(surnames)?,
        first_names: load_name_table(first_names)?,
        patronymics: load_name_table(patronymics)?,
    };
    info!(
        surnames = tables.surnames.len(),
        first_names = tables.first_names.len(),
        patronymics = tables.patronymics.len(),
        "name tables loaded"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weights_and_genders() {
        let data = "Иван;120;M\nАнна;95,5;F\nСаша\n";
        let entries = parse_name_table(data.as_bytes(), Path::new("n.csv")).unwrap();
        assert_eq!(
            entries,
            vec![
                NameEntry::new("Иван", 120.0, Some(Gender::Male)),
                NameEntry::new("Анна", 95.5, Some(Gender::Female)),
                NameEntry::new("Саша", 1.0, None),
            ]
        );
    }

    #[test]
    fn rejects_bad_weight() {
        let err = parse_name_table("Иван;many\n".as_bytes(), Path::new("n.csv")).unwrap_err();
        assert!(matches!(err, IngestError::InvalidValue { ref field, .. } if field == "weight"));
    }

    #[test]
    fn rejects_unknown_gender() {
        let err = parse_name_table("Иван;1;X\n".as_bytes(), Path::new("n.csv")).unwrap_err();
        assert!(matches!(err, IngestError::InvalidValue { ref field, .. } if field == "gender"));
    }
}
