//! Generation pipeline: ingest, identity pool, record synthesis, CSV output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, info_span};

use medsynth_core::{DatasetGenerator, GenerationInput, PaymentDraw, synthesize_identities};
use medsynth_ingest::{load_catalog, load_name_tables, load_seasonality};
use medsynth_model::{Identity, NameTables, SeasonalityIndex, SpecialistCatalog, VisitRecord};
use medsynth_output::write_dataset_csv;

use crate::config::GenerationSettings;
use crate::logging::redact_value;

#[derive(Debug)]
pub struct GenerationOutcome {
    pub records: Vec<VisitRecord>,
    /// Network and bank drawn for each record, in record order.
    pub payments: Vec<PaymentDraw>,
    /// Seed actually used; pass it back as `--seed` to reproduce the run.
    pub seed: u64,
    pub identities: usize,
    pub specialists: usize,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
}

pub struct ReferenceData {
    pub catalog: SpecialistCatalog,
    pub seasonality: SeasonalityIndex,
    pub names: NameTables,
}

pub fn ingest(settings: &GenerationSettings) -> Result<ReferenceData> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let catalog = load_catalog(&settings.specialists, &settings.analyses)
        .context("load specialist catalog")?;
    let seasonality = match &settings.seasonality {
        Some(path) => load_seasonality(path).context("load seasonality")?,
        None => SeasonalityIndex::default(),
    };
    let names = match &settings.names {
        Some(files) => load_name_tables(&files.surnames, &files.first_names, &files.patronymics)
            .context("load name tables")?,
        None => {
            debug!("using built-in name tables");
            NameTables::builtin()
        }
    };
    Ok(ReferenceData {
        catalog,
        seasonality,
        names,
    })
}

/// Runs a whole generation. `on_record` receives the number of records
/// produced so far. Nothing is written when `write` is false.
pub fn run_generation<F>(
    settings: &GenerationSettings,
    write: bool,
    on_record: F,
) -> Result<GenerationOutcome>
where
    F: FnMut(usize),
{
    let seed = settings.seed.unwrap_or_else(rand::random);
    info!(seed, "random generator seeded");
    let mut rng = StdRng::seed_from_u64(seed);

    let reference = ingest(settings)?;
    let identities = identity_pool(settings.identity_pool_size, &reference.names, &mut rng);

    let visits = {
        let span = info_span!("generate", amount = settings.amount);
        let _guard = span.enter();
        let generator = DatasetGenerator::new(GenerationInput {
            catalog: &reference.catalog,
            seasonality: &reference.seasonality,
            identities: &identities,
            bank_weights: &settings.bank_weights,
            payment_weights: &settings.payment_weights,
            clock: &settings.clock,
        })
        .context("invalid generation settings")?;
        generator.generate_visits(settings.amount, &mut rng, on_record)?
    };
    let (records, payments): (Vec<VisitRecord>, Vec<PaymentDraw>) = visits
        .into_iter()
        .map(|visit| (visit.record, visit.payment))
        .unzip();

    let output = if write {
        let span = info_span!("write", path = %settings.output.display());
        let _guard = span.enter();
        write_dataset_csv(&settings.output, &records)
            .with_context(|| format!("write {}", settings.output.display()))?;
        Some(settings.output.clone())
    } else {
        info!("dry run, dataset not written");
        None
    };

    Ok(GenerationOutcome {
        records,
        payments,
        seed,
        identities: identities.len(),
        specialists: reference.catalog.len(),
        output,
    })
}

fn identity_pool(size: usize, names: &NameTables, rng: &mut StdRng) -> Vec<Identity> {
    let span = info_span!("identities", size);
    let _guard = span.enter();
    let pool = synthesize_identities(size, names, rng);
    if let Some(first) = pool.first() {
        debug!(
            full_name = redact_value(&first.full_name),
            passport = redact_value(&first.passport),
            snils = redact_value(&first.snils),
            "identity pool sample"
        );
    }
    pool
}
