//! Lab analysis selection and visit costing.

use std::collections::HashMap;

use medsynth_model::AnalysisPrice;
use rand::Rng;
use tracing::debug;

use crate::symptoms::sample_distinct;

const MAX_ANALYSES: usize = 5;
const UNPRICED_MIN: f64 = 500.0;
const UNPRICED_MAX: f64 = 5000.0;

/// Draws between one and five distinct analysis names from `catalog`.
pub fn choose_analyses<R: Rng + ?Sized>(catalog: &[AnalysisPrice], rng: &mut R) -> Vec<String> {
    let names: Vec<String> = catalog.iter().map(|a| a.name.clone()).collect();
    sample_distinct(&names, MAX_ANALYSES, rng)
}

/// Sums catalog prices, rounded to cents.
///
/// Analyses without a usable catalog price cost a random amount in
/// `[500, 5000)`.
pub fn price_analyses<R: Rng + ?Sized>(
    analyses: &[String],
    catalog: &[AnalysisPrice],
    rng: &mut R,
) -> f64 {
    let prices: HashMap<&str, f64> = catalog
        .iter()
        .filter_map(|a| {
            a.price
                .filter(|price| price.is_finite() && *price >= 0.0)
                .map(|price| (a.name.as_str(), price))
        })
        .collect();
    let total: f64 = analyses
        .iter()
        .map(|name| match prices.get(name.as_str()) {
            Some(price) => *price,
            None => {
                debug!(analysis = %name, "no catalog price, substituting a random one");
                rng.random_range(UNPRICED_MIN..UNPRICED_MAX)
            }
        })
        .sum();
    (total * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Vec<AnalysisPrice> {
        vec![
            AnalysisPrice::new("ECG", Some(1500.0)),
            AnalysisPrice::new("Blood panel", Some(800.0)),
            AnalysisPrice::new("Lipid profile", Some(650.5)),
            AnalysisPrice::new("Troponin", Some(1200.25)),
            AnalysisPrice::new("Echo", Some(3400.0)),
            AnalysisPrice::new("Holter", Some(2800.0)),
        ]
    }

    #[test]
    fn selection_is_bounded_by_five() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..300 {
            let chosen = choose_analyses(&catalog(), &mut rng);
            assert!((1..=MAX_ANALYSES).contains(&chosen.len()));
        }
    }

    #[test]
    fn empty_catalog_yields_no_analyses() {
        let mut rng = StdRng::seed_from_u64(8);
        assert!(choose_analyses(&[], &mut rng).is_empty());
        assert_eq!(price_analyses(&[], &[], &mut rng), 0.0);
    }

    #[test]
    fn mapped_prices_sum_exactly() {
        let mut rng = StdRng::seed_from_u64(8);
        let chosen = vec!["Lipid profile".to_string(), "Troponin".to_string()];
        assert_eq!(price_analyses(&chosen, &catalog(), &mut rng), 1850.75);
    }

    #[test]
    fn unpriced_analysis_gets_bounded_random_price() {
        let catalog = vec![
            AnalysisPrice::new("ECG", Some(1500.0)),
            AnalysisPrice::new("Mystery", None),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let cost = price_analyses(&["ECG".to_string(), "Mystery".to_string()], &catalog, &mut rng);
            assert!((1500.0 + UNPRICED_MIN..=1500.0 + UNPRICED_MAX).contains(&cost));
        }
    }

    #[test]
    fn unknown_name_is_priced_randomly() {
        let mut rng = StdRng::seed_from_u64(8);
        let cost = price_analyses(&["Not listed".to_string()], &catalog(), &mut rng);
        assert!((UNPRICED_MIN..=UNPRICED_MAX).contains(&cost));
    }

    #[test]
    fn total_is_rounded_to_cents() {
        let catalog = vec![
            AnalysisPrice::new("A", Some(100.123)),
            AnalysisPrice::new("B", Some(0.5)),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        let cost = price_analyses(&["A".to_string(), "B".to_string()], &catalog, &mut rng);
        assert!((cost - 100.62).abs() < 1e-9);
    }

    #[test]
    fn unusable_prices_are_treated_as_unpriced() {
        let catalog = vec![
            AnalysisPrice::new("Refund", Some(-250.0)),
            AnalysisPrice::new("Overflow", Some(f64::INFINITY)),
            AnalysisPrice::new("Garbled", Some(f64::NAN)),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        for name in ["Refund", "Overflow", "Garbled"] {
            let cost = price_analyses(&[name.to_string()], &catalog, &mut rng);
            assert!((UNPRICED_MIN..=UNPRICED_MAX).contains(&cost), "{name}: {cost}");
        }
    }
}
