//! Specialist reference catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A billable analysis and its catalog price.
///
/// `price` is `None` when the source value could not be read as a number;
/// such analyses are treated as unpriced when costing a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPrice {
    pub name: String,
    pub price: Option<f64>,
}

impl AnalysisPrice {
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Specialists in popularity order plus their symptom and analysis vocabularies.
///
/// Lookups for a specialist without an entry yield empty slices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialistCatalog {
    /// Most popular first.
    pub specialists: Vec<String>,
    /// Symptom vocabulary per specialist, most common first.
    pub symptoms: BTreeMap<String, Vec<String>>,
    pub analyses: BTreeMap<String, Vec<AnalysisPrice>>,
}

impl SpecialistCatalog {
    pub fn new(specialists: Vec<String>) -> Self {
        Self {
            specialists,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_symptoms(mut self, specialist: impl Into<String>, symptoms: Vec<String>) -> Self {
        self.symptoms.insert(specialist.into(), symptoms);
        self
    }

    #[must_use]
    pub fn with_analyses(
        mut self,
        specialist: impl Into<String>,
        analyses: Vec<AnalysisPrice>,
    ) -> Self {
        self.analyses.insert(specialist.into(), analyses);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }

    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn symptoms(&self, specialist: &str) -> &[String] {
        self.symptoms
            .get(specialist)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn analyses(&self, specialist: &str) -> &[AnalysisPrice] {
        self.analyses
            .get(specialist)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
