//! Generation settings.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! command-line flags. A TOML weight table replaces the built-in table; a
//! `NAME=WEIGHT` flag overrides a single entry of whichever table is active.
//!
//! ```toml
//! amount = 500
//! seed = 42
//! output = "out/visits.csv"
//! min_time = "08:00"
//!
//! [data]
//! specialists = "data/medical_specialities.csv"
//! analyses = "data/medical_tests_and_prices.csv"
//!
//! [bank_weights]
//! "SBERBANK OF RUSSIA" = 3
//! "VTB BANK" = 1
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;

use medsynth_core::{VisitClock, parse_time_of_day};
use medsynth_model::WeightMap;

pub const DEFAULT_AMOUNT: usize = 1000;
pub const DEFAULT_OUTPUT: &str = "output/medical_dataset.csv";
pub const DEFAULT_SPECIALISTS: &str = "data/medical_specialities.csv";
pub const DEFAULT_ANALYSES: &str = "data/medical_tests_and_prices.csv";

pub const DEFAULT_BANK_WEIGHTS: [(&str, f64); 5] = [
    ("GAZPROMBANK", 5.0),
    ("MTS BANK", 1.0),
    ("SBERBANK OF RUSSIA", 1.0),
    ("TINKOFF BANK", 2.0),
    ("VTB BANK", 4.0),
];

pub const DEFAULT_PAYMENT_WEIGHTS: [(&str, f64); 3] =
    [("MIR", 3.0), ("VISA", 5.0), ("MASTERCARD", 2.0)];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reference-data file locations. Unset entries fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataFiles {
    pub specialists: Option<PathBuf>,
    pub analyses: Option<PathBuf>,
    pub seasonality: Option<PathBuf>,
    pub surnames: Option<PathBuf>,
    pub first_names: Option<PathBuf>,
    pub patronymics: Option<PathBuf>,
}

impl DataFiles {
    fn or(self, fallback: DataFiles) -> DataFiles {
        DataFiles {
            specialists: self.specialists.or(fallback.specialists),
            analyses: self.analyses.or(fallback.analyses),
            seasonality: self.seasonality.or(fallback.seasonality),
            surnames: self.surnames.or(fallback.surnames),
            first_names: self.first_names.or(fallback.first_names),
            patronymics: self.patronymics.or(fallback.patronymics),
        }
    }
}

/// Contents of a `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub amount: Option<usize>,
    pub identity_pool_size: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_time: Option<String>,
    pub max_time: Option<String>,
    pub data: DataFiles,
    pub bank_weights: Option<BTreeMap<String, f64>>,
    pub payment_weights: Option<BTreeMap<String, f64>>,
}

impl FileConfig {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("in {}", path.display()))
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub amount: Option<usize>,
    pub identity_pool_size: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_time: Option<String>,
    pub max_time: Option<String>,
    pub data: DataFiles,
    pub bank_weights: Vec<(String, f64)>,
    pub payment_weights: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFiles {
    pub surnames: PathBuf,
    pub first_names: PathBuf,
    pub patronymics: PathBuf,
}

/// Fully resolved and validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub amount: usize,
    pub identity_pool_size: usize,
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub specialists: PathBuf,
    pub analyses: PathBuf,
    pub seasonality: Option<PathBuf>,
    /// Built-in name tables are used when unset.
    pub names: Option<NameFiles>,
    pub bank_weights: WeightMap,
    pub payment_weights: WeightMap,
    pub clock: VisitClock,
}

impl GenerationSettings {
    pub fn resolve(file: FileConfig, flags: Overrides) -> Result<Self> {
        let amount = flags.amount.or(file.amount).unwrap_or(DEFAULT_AMOUNT);
        let identity_pool_size = flags
            .identity_pool_size
            .or(file.identity_pool_size)
            .unwrap_or(amount);
        let data = flags.data.or(file.data);

        let defaults = VisitClock::default();
        let clock = VisitClock::new(
            date_or(flags.start_date.or(file.start_date), defaults.start())?,
            date_or(flags.end_date.or(file.end_date), defaults.end())?,
            time_or(flags.min_time.or(file.min_time), "09:00")?,
            time_or(flags.max_time.or(file.max_time), "21:00")?,
        )?;

        Ok(Self {
            amount,
            identity_pool_size,
            seed: flags.seed.or(file.seed),
            output: flags
                .output
                .or(file.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            specialists: data
                .specialists
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SPECIALISTS)),
            analyses: data
                .analyses
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYSES)),
            seasonality: data.seasonality,
            names: name_files(data.surnames, data.first_names, data.patronymics)?,
            bank_weights: layered_weights(
                "bank",
                &DEFAULT_BANK_WEIGHTS,
                file.bank_weights,
                flags.bank_weights,
            )?,
            payment_weights: layered_weights(
                "payment network",
                &DEFAULT_PAYMENT_WEIGHTS,
                file.payment_weights,
                flags.payment_weights,
            )?,
            clock,
        })
    }
}

/// Parses a `NAME=WEIGHT` flag value. The split is at the last `=`.
pub fn parse_weight_flag(raw: &str) -> Result<(String, f64), String> {
    let Some((name, weight)) = raw.rsplit_once('=') else {
        return Err(format!("expected NAME=WEIGHT, got `{raw}`"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in `{raw}`"));
    }
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("weight must be a number in `{raw}`"))?;
    Ok((name.to_string(), weight))
}

fn layered_weights(
    map: &str,
    defaults: &[(&str, f64)],
    file: Option<BTreeMap<String, f64>>,
    flags: Vec<(String, f64)>,
) -> Result<WeightMap> {
    let mut entries: Vec<(String, f64)> = match file {
        Some(table) => table.into_iter().collect(),
        None => defaults
            .iter()
            .map(|(name, weight)| ((*name).to_string(), *weight))
            .collect(),
    };
    entries.extend(flags);
    Ok(WeightMap::new(map, entries)?)
}

fn name_files(
    surnames: Option<PathBuf>,
    first_names: Option<PathBuf>,
    patronymics: Option<PathBuf>,
) -> Result<Option<NameFiles>> {
    match (surnames, first_names, patronymics) {
        (Some(surnames), Some(first_names), Some(patronymics)) => Ok(Some(NameFiles {
            surnames,
            first_names,
            patronymics,
        })),
        (None, None, None) => Ok(None),
        _ => bail!("surnames, first_names and patronymics tables must be given together"),
    }
}

fn date_or(value: Option<String>, fallback: NaiveDate) -> Result<NaiveDate> {
    match value {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .with_context(|| format!("invalid date `{raw}`, expected YYYY-MM-DD")),
        None => Ok(fallback),
    }
}

fn time_or(value: Option<String>, fallback: &str) -> Result<chrono::NaiveTime> {
    Ok(parse_time_of_day(value.as_deref().unwrap_or(fallback))?)
}
