use std::io::Read;
use std::path::Path;

use medsynth_model::{MONTHS, SeasonalityIndex};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::reader::{open, read_rows};

/// Parses `symptom;jan;feb;...;dec` rows of probabilities in `[0, 1]`.
pub fn parse_seasonality<R: Read>(source: R, path: &Path) -> Result<SeasonalityIndex> {
    let mut index = SeasonalityIndex::new();
    for row in read_rows(source, path)? {
        let Some((symptom, values)) = row.fields.split_first() else {
            continue;
        };
        if values.len() != MONTHS {
            return Err(IngestError::InvalidSeasonality {
                symptom: symptom.clone(),
                found: values.len(),
                path: path.to_path_buf(),
            });
        }
        let mut weights = [1.0; MONTHS];
        for (slot, raw) in weights.iter_mut().zip(values) {
            *slot = raw
                .replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|w| (0.0..=1.0).contains(w))
                .ok_or_else(|| IngestError::InvalidValue {
                    field: "seasonality".to_string(),
                    value: raw.clone(),
                    path: path.to_path_buf(),
                    line: row.line,
                })?;
        }
        index.insert(symptom.clone(), weights);
    }
    info!(symptoms = index.len(), "seasonality index loaded");
    Ok(index)
}

pub fn load_seasonality(path: &Path) -> Result<SeasonalityIndex> {
    parse_seasonality(open(path)?, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_monthly_weights() {
        let data = "flu;1;1;0.8;0.5;0.2;0.1;0.1;0.1;0.3;0.6;0,9;1\n";
        let index = parse_seasonality(data.as_bytes(), Path::new("s.csv")).unwrap();
        assert_eq!(index.weight("flu", 1), 1.0);
        assert_eq!(index.weight("flu", 7), 0.1);
        assert_eq!(index.weight("flu", 11), 0.9);
        assert_eq!(index.weight("rash", 7), 1.0);
    }

    #[test]
    fn rejects_wrong_month_count() {
        let err = parse_seasonality("flu;1;1\n".as_bytes(), Path::new("s.csv")).unwrap_err();
        assert!(matches!(err, IngestError::InvalidSeasonality { found: 2, .. }));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let data = "flu;1;1;1;1;1;1;1;1;1;1;1;1.5\n";
        let err = parse_seasonality(data.as_bytes(), Path::new("s.csv")).unwrap_err();
        assert!(matches!(err, IngestError::InvalidValue { line: 1, .. }));
    }
}
