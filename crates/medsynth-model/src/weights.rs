//! Caller-supplied categorical weights.

use crate::error::ConfigError;

/// Ordered `(key, weight)` pairs with a validated positive sum.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMap {
    entries: Vec<(String, f64)>,
}

impl WeightMap {
    /// Builds a weight map named `map` (used in error messages).
    ///
    /// Weights must be finite and non-negative, must not all be zero, and
    /// their total must be finite.
    /// A repeated key replaces the earlier weight.
    pub fn new<K, I>(map: &str, entries: I) -> Result<Self, ConfigError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut merged: Vec<(String, f64)> = Vec::new();
        for (key, weight) in entries {
            let key = key.into();
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    map: map.to_string(),
                    key,
                    value: weight,
                });
            }
            match merged.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = weight,
                None => merged.push((key, weight)),
            }
        }
        if merged.is_empty() {
            return Err(ConfigError::EmptyWeightMap {
                map: map.to_string(),
            });
        }
        let total: f64 = merged.iter().map(|(_, w)| w).sum();
        if !total.is_finite() {
            return Err(ConfigError::WeightSumOverflow {
                map: map.to_string(),
            });
        }
        if total <= 0.0 {
            return Err(ConfigError::ZeroWeightSum {
                map: map.to_string(),
            });
        }
        Ok(Self { entries: merged })
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, w)| *w)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, w)| *w)
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let map = WeightMap::new("bank", [("B", 1.0), ("A", 2.0)]).unwrap();
        assert_eq!(map.key_at(0), Some("B"));
        assert_eq!(map.key_at(1), Some("A"));
        assert_eq!(map.weights().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn repeated_key_replaces_weight() {
        let map = WeightMap::new("bank", [("A", 1.0), ("A", 4.0)]).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("A"), Some(4.0));
    }

    #[test]
    fn rejects_zero_sum() {
        let err = WeightMap::new("payment", [("MIR", 0.0), ("VISA", 0.0)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroWeightSum {
                map: "payment".to_string()
            }
        );
        assert_eq!(err.to_string(), "payment weights sum to zero");
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            WeightMap::new("bank", [("A", -1.0)]),
            Err(ConfigError::InvalidWeight { .. })
        ));
        assert!(matches!(
            WeightMap::new("bank", [("A", f64::NAN)]),
            Err(ConfigError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn rejects_total_that_overflows() {
        let err = WeightMap::new("bank", [("A", 1e308), ("B", 1e308)]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WeightSumOverflow {
                map: "bank".to_string()
            }
        );
        assert!(WeightMap::new("bank", [("A", 1e308), ("B", 1.0)]).is_ok());
    }

    #[test]
    fn rejects_empty() {
        let entries: Vec<(String, f64)> = Vec::new();
        assert!(matches!(
            WeightMap::new("bank", entries),
            Err(ConfigError::EmptyWeightMap { .. })
        ));
    }
}
