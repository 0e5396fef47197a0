use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::pipeline::GenerationOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub records: usize,
    pub identities: usize,
    pub specialists: usize,
    pub output: Option<PathBuf>,
    pub total_cost: f64,
    pub mean_cost: f64,
    pub by_specialist: BTreeMap<String, usize>,
    pub by_network: BTreeMap<String, usize>,
    /// Keyed by the bank name drawn from the bank weights.
    pub by_bank: BTreeMap<String, usize>,
    pub duration_ms: u128,
}

impl RunSummary {
    pub fn from_outcome(outcome: &GenerationOutcome, elapsed: Duration) -> Self {
        let mut by_specialist = BTreeMap::new();
        let mut by_network = BTreeMap::new();
        let mut by_bank = BTreeMap::new();
        let mut total_cost = 0.0;
        for record in &outcome.records {
            *by_specialist.entry(record.specialist.clone()).or_insert(0) += 1;
            total_cost += record.cost;
        }
        for payment in &outcome.payments {
            *by_network
                .entry(payment.network.as_str().to_string())
                .or_insert(0) += 1;
            *by_bank.entry(payment.bank.clone()).or_insert(0) += 1;
        }
        let records = outcome.records.len();
        let mean_cost = if records == 0 {
            0.0
        } else {
            total_cost / records as f64
        };
        Self {
            seed: outcome.seed,
            records,
            identities: outcome.identities,
            specialists: outcome.specialists,
            output: outcome.output.clone(),
            total_cost: round_cents(total_cost),
            mean_cost: round_cents(mean_cost),
            by_specialist,
            by_network,
            by_bank,
            duration_ms: elapsed.as_millis(),
        }
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use medsynth_core::PaymentDraw;
    use medsynth_model::{PaymentNetwork, VisitRecord};

    fn record(specialist: &str, cost: f64) -> VisitRecord {
        VisitRecord {
            full_name: "Jane Doe".to_string(),
            passport: "7712 345678".to_string(),
            snils: "123456789 00".to_string(),
            symptoms: Vec::new(),
            specialist: specialist.to_string(),
            visit_at: "2024-01-01T09:00+03:00".to_string(),
            analyses: Vec::new(),
            analysis_at: "2024-01-01T09:00+03:00".to_string(),
            cost,
            card_number: "4306 4399 1000 9999".to_string(),
        }
    }

    #[test]
    fn banks_are_counted_by_drawn_name() {
        let payment = |network, bank: &str| PaymentDraw {
            network,
            bank: bank.to_string(),
        };
        let outcome = GenerationOutcome {
            records: vec![record("Cardiologist", 100.0), record("Cardiologist", 50.5)],
            payments: vec![
                payment(PaymentNetwork::Visa, "ALFA-BANK"),
                payment(PaymentNetwork::Mir, "GAZPROMBANK"),
            ],
            seed: 1,
            identities: 1,
            specialists: 1,
            output: None,
        };
        let summary = RunSummary::from_outcome(&outcome, Duration::from_millis(3));
        assert_eq!(summary.by_bank.get("ALFA-BANK"), Some(&1));
        assert_eq!(summary.by_bank.get("GAZPROMBANK"), Some(&1));
        assert!(!summary.by_bank.contains_key("OTHER"));
        assert_eq!(summary.by_network.get("VISA"), Some(&1));
        assert_eq!(summary.by_network.get("MIR"), Some(&1));
        assert_eq!(summary.total_cost, 150.5);
        assert_eq!(summary.mean_cost, 75.25);
    }
}
