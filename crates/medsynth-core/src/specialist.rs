//! Rank-biased specialist selection.
//!
//! The i-th specialist (0-based) in popularity order weighs `1 / (i + 1)`.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{GenerationError, Result};

/// Harmonic-decay sampler over a fixed specialist order.
#[derive(Debug, Clone)]
pub struct SpecialistSelector<'a> {
    specialists: &'a [String],
    index: WeightedIndex<f64>,
}

impl<'a> SpecialistSelector<'a> {
    pub fn new(specialists: &'a [String]) -> Result<Self> {
        if specialists.is_empty() {
            return Err(GenerationError::InvalidInput {
                message: "cannot select a specialist from an empty catalog".to_string(),
            });
        }
        let index = WeightedIndex::new(rank_weights(specialists.len())).map_err(|e| {
            GenerationError::InvalidInput {
                message: format!("specialist weights: {e}"),
            }
        })?;
        Ok(Self { specialists, index })
    }

    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        &self.specialists[self.index.sample(rng)]
    }
}

/// Selection probability of each rank, normalised to sum to one.
pub fn rank_weights(len: usize) -> Vec<f64> {
    let raw: Vec<f64> = (0..len).map(|i| 1.0 / (i as f64 + 1.0)).collect();
    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// One-off draw; use [`SpecialistSelector`] for repeated draws.
pub fn select_specialist<'a, R: Rng + ?Sized>(
    specialists: &'a [String],
    rng: &mut R,
) -> Result<&'a str> {
    Ok(SpecialistSelector::new(specialists)?.select(rng))
}
