use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MONTHS: usize = 12;

/// Per-symptom monthly retention probabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityIndex {
    weights: BTreeMap<String, [f64; MONTHS]>,
}

impl SeasonalityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symptom: impl Into<String>, weights: [f64; MONTHS]) {
        self.weights.insert(symptom.into(), weights);
    }

    #[must_use]
    pub fn with(mut self, symptom: impl Into<String>, weights: [f64; MONTHS]) -> Self {
        self.insert(symptom, weights);
        self
    }

    /// Probability of keeping `symptom` in calendar `month` (1-12).
    ///
    /// Unknown symptoms and out-of-range months weigh 1.0.
    pub fn weight(&self, symptom: &str, month: u32) -> f64 {
        let Some(index) = (month as usize).checked_sub(1).filter(|m| *m < MONTHS) else {
            return 1.0;
        };
        self.weights.get(symptom).map_or(1.0, |w| w[index])
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symptom_defaults_to_one() {
        let index = SeasonalityIndex::new();
        for month in 1..=12 {
            assert_eq!(index.weight("cough", month), 1.0);
        }
    }

    #[test]
    fn months_are_one_based() {
        let mut weights = [0.5; MONTHS];
        weights[0] = 0.9;
        weights[11] = 0.1;
        let index = SeasonalityIndex::new().with("cough", weights);
        assert_eq!(index.weight("cough", 1), 0.9);
        assert_eq!(index.weight("cough", 12), 0.1);
        assert_eq!(index.weight("cough", 0), 1.0);
        assert_eq!(index.weight("cough", 13), 1.0);
    }
}
