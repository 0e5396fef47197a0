//! Record composition and the dataset driver.

use chrono::Datelike;
use medsynth_model::{
    ConfigError, Identity, IssuingBank, PaymentNetwork, SeasonalityIndex, SpecialistCatalog,
    VisitRecord, WeightMap,
};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::IndexedRandom;
use tracing::{debug, info, trace};

use crate::analyses::{choose_analyses, price_analyses};
use crate::card::generate_card_number;
use crate::clock::{VisitClock, format_timestamp};
use crate::error::{GenerationError, Result};
use crate::specialist::SpecialistSelector;
use crate::symptoms::{apply_seasonality, choose_symptoms};

/// Read-only reference data for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct GenerationInput<'a> {
    pub catalog: &'a SpecialistCatalog,
    pub seasonality: &'a SeasonalityIndex,
    pub identities: &'a [Identity],
    pub bank_weights: &'a WeightMap,
    pub payment_weights: &'a WeightMap,
    pub clock: &'a VisitClock,
}

/// Network and bank drawn for one visit. `bank` is the weight-map key as
/// configured, so banks without their own issuer prefix keep their name.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraw {
    pub network: PaymentNetwork,
    pub bank: String,
}

/// A composed record together with the payment draws behind its card number.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVisit {
    pub record: VisitRecord,
    pub payment: PaymentDraw,
}

/// Weighted categorical draw over a [`WeightMap`].
#[derive(Debug, Clone)]
struct WeightedKeys<'a> {
    map: &'a WeightMap,
    index: WeightedIndex<f64>,
}

impl<'a> WeightedKeys<'a> {
    fn new(name: &str, map: &'a WeightMap) -> Result<Self> {
        let index =
            WeightedIndex::new(map.weights()).map_err(|err| GenerationError::InvalidInput {
                message: format!("{name} weights rejected by sampler: {err}"),
            })?;
        Ok(Self { map, index })
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        self.map.key_at(self.index.sample(rng)).unwrap_or_default()
    }
}

/// Validated generator; all configuration errors surface from [`DatasetGenerator::new`].
#[derive(Debug, Clone)]
pub struct DatasetGenerator<'a> {
    input: GenerationInput<'a>,
    specialists: SpecialistSelector<'a>,
    banks: WeightedKeys<'a>,
    networks: WeightedKeys<'a>,
}

impl<'a> DatasetGenerator<'a> {
    pub fn new(input: GenerationInput<'a>) -> Result<Self> {
        if input.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog.into());
        }
        let specialists = SpecialistSelector::new(&input.catalog.specialists)?;
        let banks = WeightedKeys::new("bank", input.bank_weights)?;
        let networks = WeightedKeys::new("payment", input.payment_weights)?;
        for name in &input.catalog.specialists {
            if input.catalog.symptoms(name).is_empty() {
                debug!(specialist = %name, "no symptom vocabulary");
            }
            if input.catalog.analyses(name).is_empty() {
                debug!(specialist = %name, "no analysis catalog");
            }
        }
        Ok(Self {
            input,
            specialists,
            banks,
            networks,
        })
    }

    /// Composes one visit from independent draws.
    pub fn compose_record<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<VisitRecord> {
        self.compose_visit(rng).map(|visit| visit.record)
    }

    /// Like [`compose_record`](Self::compose_record), also returning the
    /// drawn network and bank.
    pub fn compose_visit<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedVisit> {
        let person = self
            .input
            .identities
            .choose(rng)
            .ok_or(ConfigError::EmptyIdentityPool)?;
        let catalog = self.input.catalog;
        let specialist = self.specialists.select(rng);

        let visit_at = self.input.clock.sample(rng);
        let symptoms = choose_symptoms(catalog.symptoms(specialist), rng);
        let symptoms = apply_seasonality(symptoms, visit_at.month(), self.input.seasonality, rng);

        let analyses = choose_analyses(catalog.analyses(specialist), rng);
        // Analysis date is drawn independently of the visit date.
        let analysis_at = self.input.clock.sample(rng);
        let cost = price_analyses(&analyses, catalog.analyses(specialist), rng);

        let network = PaymentNetwork::from_name(self.networks.pick(rng));
        let bank_name = self.banks.pick(rng);
        let bank = IssuingBank::from_name(bank_name);
        let card_number = generate_card_number(network, bank, rng);

        trace!(
            specialist,
            symptoms = symptoms.len(),
            analyses = analyses.len(),
            %network,
            bank = bank_name,
            "composed record"
        );

        let record = VisitRecord {
            full_name: person.full_name.clone(),
            passport: person.passport.clone(),
            snils: person.snils.clone(),
            symptoms,
            specialist: specialist.to_string(),
            visit_at: format_timestamp(&visit_at),
            analyses,
            analysis_at: format_timestamp(&analysis_at),
            cost,
            card_number,
        };
        Ok(GeneratedVisit {
            record,
            payment: PaymentDraw {
                network,
                bank: bank_name.to_string(),
            },
        })
    }

    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<VisitRecord>> {
        self.generate_with_progress(n, rng, |_| {})
    }

    /// Like [`generate`](Self::generate), calling `on_record` with the number
    /// of records produced so far after each one.
    pub fn generate_with_progress<R, F>(
        &self,
        n: usize,
        rng: &mut R,
        on_record: F,
    ) -> Result<Vec<VisitRecord>>
    where
        R: Rng + ?Sized,
        F: FnMut(usize),
    {
        let visits = self.generate_visits(n, rng, on_record)?;
        Ok(visits.into_iter().map(|visit| visit.record).collect())
    }

    /// Generates `n` visits with their payment draws. Consumes the random
    /// stream exactly like [`generate_with_progress`](Self::generate_with_progress).
    pub fn generate_visits<R, F>(
        &self,
        n: usize,
        rng: &mut R,
        mut on_record: F,
    ) -> Result<Vec<GeneratedVisit>>
    where
        R: Rng + ?Sized,
        F: FnMut(usize),
    {
        if n > 0 && self.input.identities.is_empty() {
            return Err(ConfigError::EmptyIdentityPool.into());
        }
        let mut visits = Vec::with_capacity(n);
        for done in 1..=n {
            visits.push(self.compose_visit(rng)?);
            on_record(done);
        }
        info!(
            rows = visits.len(),
            specialists = self.input.catalog.len(),
            identities = self.input.identities.len(),
            "dataset generated"
        );
        Ok(visits)
    }
}

/// Validates `input` and generates `n` records in generation order.
pub fn generate_dataset<R: Rng + ?Sized>(
    n: usize,
    input: GenerationInput<'_>,
    rng: &mut R,
) -> Result<Vec<VisitRecord>> {
    DatasetGenerator::new(input)?.generate(n, rng)
}
