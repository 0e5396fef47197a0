//! Symptom sampling and the seasonal filter.

use medsynth_model::SeasonalityIndex;
use rand::Rng;
use rand::seq::index;

const MAX_SYMPTOMS: usize = 7;

/// Draws between one and seven distinct symptoms from `vocabulary`.
///
/// An empty vocabulary yields an empty selection.
pub fn choose_symptoms<R: Rng + ?Sized>(vocabulary: &[String], rng: &mut R) -> Vec<String> {
    sample_distinct(vocabulary, MAX_SYMPTOMS, rng)
}

/// Keeps each symptom with its probability for `month` (1-12).
///
/// If nothing survives, the unfiltered selection is returned instead.
pub fn apply_seasonality<R: Rng + ?Sized>(
    symptoms: Vec<String>,
    month: u32,
    seasonality: &SeasonalityIndex,
    rng: &mut R,
) -> Vec<String> {
    let kept: Vec<String> = symptoms
        .iter()
        .filter(|symptom| rng.random::<f64>() < seasonality.weight(symptom, month))
        .cloned()
        .collect();
    if kept.is_empty() { symptoms } else { kept }
}

/// Uniform count in `1..=min(max, len)`, then that many distinct items.
pub(crate) fn sample_distinct<R: Rng + ?Sized>(
    items: &[String],
    max: usize,
    rng: &mut R,
) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let count = rng.random_range(1..=max.min(items.len()));
    index::sample(rng, items.len(), count)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medsynth_model::MONTHS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeSet;

    fn vocabulary(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("symptom {i}")).collect()
    }

    #[test]
    fn selection_is_distinct_and_bounded() {
        let vocab = vocabulary(12);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let chosen = choose_symptoms(&vocab, &mut rng);
            assert!((1..=MAX_SYMPTOMS).contains(&chosen.len()));
            let unique: BTreeSet<_> = chosen.iter().collect();
            assert_eq!(unique.len(), chosen.len());
            assert!(chosen.iter().all(|s| vocab.contains(s)));
        }
    }

    #[test]
    fn single_entry_vocabulary_yields_it() {
        let vocab = vocabulary(1);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(choose_symptoms(&vocab, &mut rng), vocab);
    }

    #[test]
    fn empty_vocabulary_yields_empty_selection() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(choose_symptoms(&[], &mut rng).is_empty());
    }

    #[test]
    fn fully_filtered_selection_falls_back_to_unfiltered() {
        let symptoms = vocabulary(3);
        let mut index = SeasonalityIndex::new();
        for symptom in &symptoms {
            index.insert(symptom.clone(), [0.0; MONTHS]);
        }
        let mut rng = StdRng::seed_from_u64(4);
        let result = apply_seasonality(symptoms.clone(), 6, &index, &mut rng);
        assert_eq!(result, symptoms);
    }

    #[test]
    fn out_of_season_symptoms_are_dropped() {
        let mut winter = [0.0; MONTHS];
        winter[0] = 1.0;
        let index = SeasonalityIndex::new().with("flu", winter);
        let symptoms = vec!["flu".to_string(), "rash".to_string()];
        let mut rng = StdRng::seed_from_u64(4);

        let july = apply_seasonality(symptoms.clone(), 7, &index, &mut rng);
        assert_eq!(july, vec!["rash".to_string()]);

        let january = apply_seasonality(symptoms.clone(), 1, &index, &mut rng);
        assert_eq!(january, symptoms);
    }

    #[test]
    fn never_empty_for_non_empty_vocabulary() {
        let vocab = vocabulary(5);
        let mut index = SeasonalityIndex::new();
        for symptom in &vocab {
            index.insert(symptom.clone(), [0.05; MONTHS]);
        }
        let mut rng = StdRng::seed_from_u64(21);
        for month in 1..=12 {
            let chosen = choose_symptoms(&vocab, &mut rng);
            assert!(!apply_seasonality(chosen, month, &index, &mut rng).is_empty());
        }
    }
}
