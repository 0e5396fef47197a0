//! Specialist and analysis-price files, joined by specialist name.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use medsynth_model::{AnalysisPrice, SpecialistCatalog};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::reader::{open, read_rows, split_list};

/// One line of the specialist file, in popularity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistRow {
    pub name: String,
    pub symptoms: Vec<String>,
}

/// Parses `[code;]name;symptom, symptom, ...` rows.
///
/// With three or more fields the first is an identifier and is ignored.
pub fn parse_specialists<R: Read>(source: R, path: &Path) -> Result<Vec<SpecialistRow>> {
    let mut specialists = Vec::new();
    for row in read_rows(source, path)? {
        let (name, symptoms) = match row.fields.as_slice() {
            [name] => (name, None),
            [name, symptoms] => (name, Some(symptoms)),
            [_, name, symptoms, ..] => (name, Some(symptoms)),
            [] => continue,
        };
        if name.is_empty() {
            warn!(path = %path.display(), line = row.line, "specialist row without a name");
            continue;
        }
        let symptoms = symptoms.map(|s| split_list(s)).unwrap_or_default();
        if symptoms.is_empty() {
            warn!(specialist = %name, "no symptoms listed for specialist");
        }
        specialists.push(SpecialistRow {
            name: name.clone(),
            symptoms,
        });
    }
    if specialists.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(specialists)
}

pub fn load_specialists(path: &Path) -> Result<Vec<SpecialistRow>> {
    parse_specialists(open(path)?, path)
}

/// Splits `name, price` at the last comma.
///
/// A bare name is free; an unreadable price leaves the analysis unpriced.
fn parse_analysis_item(item: &str) -> AnalysisPrice {
    let Some((name, price)) = item.rsplit_once(',') else {
        return AnalysisPrice::new(item.trim(), Some(0.0));
    };
    let (name, price) = (name.trim(), price.trim());
    match price.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => AnalysisPrice::new(name, Some(value)),
        _ => {
            warn!(analysis = %name, price = %price, "unreadable analysis price");
            AnalysisPrice::new(name, None)
        }
    }
}

/// Parses `specialist;analysis, price;analysis, price;...` rows.
///
/// A specialist listed twice keeps the analyses of both rows; an analysis
/// named again for the same specialist keeps its first price.
pub fn parse_analyses<R: Read>(
    source: R,
    path: &Path,
) -> Result<BTreeMap<String, Vec<AnalysisPrice>>> {
    let mut analyses: BTreeMap<String, Vec<AnalysisPrice>> = BTreeMap::new();
    for row in read_rows(source, path)? {
        let Some((specialist, items)) = row.fields.split_first() else {
            continue;
        };
        if specialist.is_empty() {
            warn!(path = %path.display(), line = row.line, "analysis row without a specialist");
            continue;
        }
        let entries = analyses.entry(specialist.clone()).or_default();
        for item in items.iter().filter(|item| !item.is_empty()) {
            let analysis = parse_analysis_item(item);
            if entries.iter().any(|known| known.name == analysis.name) {
                debug!(
                    path = %path.display(),
                    line = row.line,
                    specialist = %specialist,
                    analysis = %analysis.name,
                    "duplicate analysis ignored"
                );
                continue;
            }
            entries.push(analysis);
        }
    }
    Ok(analyses)
}

pub fn load_analyses(path: &Path) -> Result<BTreeMap<String, Vec<AnalysisPrice>>> {
    parse_analyses(open(path)?, path)
}

/// Builds the catalog keyed by specialist name.
///
/// Analyses for specialists missing from `specialists` are dropped.
pub fn join_catalog(
    specialists: Vec<SpecialistRow>,
    mut analyses: BTreeMap<String, Vec<AnalysisPrice>>,
) -> SpecialistCatalog {
    let mut catalog = SpecialistCatalog::default();
    for row in specialists {
        if catalog.symptoms.contains_key(&row.name) {
            warn!(specialist = %row.name, "duplicate specialist, keeping the first entry");
            continue;
        }
        match analyses.remove(&row.name) {
            Some(list) => {
                catalog.analyses.insert(row.name.clone(), list);
            }
            None => warn!(specialist = %row.name, "no analyses listed for specialist"),
        }
        catalog.specialists.push(row.name.clone());
        catalog.symptoms.insert(row.name, row.symptoms);
    }
    for orphan in analyses.keys() {
        warn!(specialist = %orphan, "analyses listed for unknown specialist");
    }
    catalog
}

pub fn load_catalog(specialists_path: &Path, analyses_path: &Path) -> Result<SpecialistCatalog> {
    let specialists = load_specialists(specialists_path)?;
    let analyses = load_analyses(analyses_path)?;
    let catalog = join_catalog(specialists, analyses);
    info!(
        specialists = catalog.len(),
        priced_specialists = catalog.analyses.len(),
        "specialist catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_items() {
        assert_eq!(
            parse_analysis_item("ECG, 1500"),
            AnalysisPrice::new("ECG", Some(1500.0))
        );
        assert_eq!(
            parse_analysis_item("Blood test, general, 800.50"),
            AnalysisPrice::new("Blood test, general", Some(800.5))
        );
        assert_eq!(
            parse_analysis_item("Consultation"),
            AnalysisPrice::new("Consultation", Some(0.0))
        );
        assert_eq!(
            parse_analysis_item("MRI, on request"),
            AnalysisPrice::new("MRI", None)
        );
    }

    #[test]
    fn specialist_row_shapes() {
        let data = "Therapist;cough, fever\n7;Cardiologist;chest pain, fatigue\nSurgeon\n";
        let rows = parse_specialists(data.as_bytes(), Path::new("inline.csv")).unwrap();
        assert_eq!(
            rows,
            vec![
                SpecialistRow {
                    name: "Therapist".to_string(),
                    symptoms: vec!["cough".to_string(), "fever".to_string()],
                },
                SpecialistRow {
                    name: "Cardiologist".to_string(),
                    symptoms: vec!["chest pain".to_string(), "fatigue".to_string()],
                },
                SpecialistRow {
                    name: "Surgeon".to_string(),
                    symptoms: vec![],
                },
            ]
        );
    }

    #[test]
    fn empty_specialist_file_is_an_error() {
        let err = parse_specialists("\n# nothing\n".as_bytes(), Path::new("s.csv")).unwrap_err();
        assert!(matches!(err, IngestError::EmptyFile { .. }));
    }

    #[test]
    fn join_is_by_name_not_position() {
        let specialists = vec![
            SpecialistRow {
                name: "Therapist".to_string(),
                symptoms: vec!["cough".to_string()],
            },
            SpecialistRow {
                name: "Cardiologist".to_string(),
                symptoms: vec!["fatigue".to_string()],
            },
        ];
        let analyses = parse_analyses(
            "Cardiologist;ECG, 1500\nOncologist;Biopsy, 9000\nTherapist;CBC, 300\n".as_bytes(),
            Path::new("a.csv"),
        )
        .unwrap();
        let catalog = join_catalog(specialists, analyses);

        assert_eq!(catalog.specialists, vec!["Therapist", "Cardiologist"]);
        assert_eq!(catalog.analyses("Therapist")[0].name, "CBC");
        assert_eq!(catalog.analyses("Cardiologist")[0].name, "ECG");
        assert!(catalog.analyses("Oncologist").is_empty());
    }

    #[test]
    fn repeated_analysis_is_listed_once() {
        let analyses = parse_analyses(
            "Therapist;CBC, 300;ECG, 900\nTherapist;CBC, 450;Urinalysis, 200\n".as_bytes(),
            Path::new("a.csv"),
        )
        .unwrap();
        assert_eq!(
            analyses["Therapist"],
            vec![
                AnalysisPrice::new("CBC", Some(300.0)),
                AnalysisPrice::new("ECG", Some(900.0)),
                AnalysisPrice::new("Urinalysis", Some(200.0)),
            ]
        );
    }
}
