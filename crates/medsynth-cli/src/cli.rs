//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use medsynth_cli::config::{DataFiles, Overrides, parse_weight_flag};

#[derive(Parser)]
#[command(
    name = "medsynth",
    version,
    about = "Synthetic medical-visit dataset generator",
    long_about = "Generate fictitious medical-visit records (identity, symptoms, \
                  specialist, analyses, cost, payment card) from reference tables.\n\n\
                  Output is a semicolon-delimited UTF-8 CSV with a BOM."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow synthesized names, document and card numbers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a dataset and write it as CSV.
    Generate(GenerateArgs),

    /// List the card issuer prefixes per network and bank.
    Issuers,

    /// Check the control digits of a social-insurance number ("NNNNNNNNN CC").
    CheckSnils {
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// TOML file with generation settings; flags take precedence.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Specialist file: `[code;]name;symptom, symptom, ...`.
    #[arg(long = "specialists", value_name = "CSV")]
    pub specialists: Option<PathBuf>,

    /// Analyses file: `specialist;analysis, price;...`.
    #[arg(long = "analyses", value_name = "CSV")]
    pub analyses: Option<PathBuf>,

    /// Seasonality file: `symptom;m1;...;m12`.
    #[arg(long = "seasonality", value_name = "CSV")]
    pub seasonality: Option<PathBuf>,

    /// Surname table `value;weight[;gender]`.
    #[arg(long = "surnames", value_name = "CSV")]
    pub surnames: Option<PathBuf>,

    #[arg(long = "first-names", value_name = "CSV")]
    pub first_names: Option<PathBuf>,

    #[arg(long = "patronymics", value_name = "CSV")]
    pub patronymics: Option<PathBuf>,

    /// Number of records to generate (default: 1000).
    #[arg(short = 'n', long = "amount", value_name = "N")]
    pub amount: Option<usize>,

    /// Number of distinct persons to draw visits from (default: amount).
    #[arg(long = "identity-pool-size", value_name = "N")]
    pub identity_pool_size: Option<usize>,

    /// Output CSV path (default: output/medical_dataset.csv).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed for a reproducible run.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Bank weight, repeatable (e.g. --bank-weight "VTB BANK=4").
    #[arg(long = "bank-weight", value_name = "NAME=WEIGHT", value_parser = parse_weight_flag)]
    pub bank_weights: Vec<(String, f64)>,

    /// Payment network weight, repeatable (e.g. --payment-weight MIR=3).
    #[arg(long = "payment-weight", value_name = "NAME=WEIGHT", value_parser = parse_weight_flag)]
    pub payment_weights: Vec<(String, f64)>,

    /// First visit date, YYYY-MM-DD (default: 2024-01-01).
    #[arg(long = "start-date", value_name = "DATE")]
    pub start_date: Option<String>,

    /// Last visit date, YYYY-MM-DD (default: 2024-12-31).
    #[arg(long = "end-date", value_name = "DATE")]
    pub end_date: Option<String>,

    /// Earliest visit time of day, HH:MM (default: 09:00).
    #[arg(long = "min-time", value_name = "HH:MM")]
    pub min_time: Option<String>,

    /// Latest visit time of day, HH:MM (default: 21:00).
    #[arg(long = "max-time", value_name = "HH:MM")]
    pub max_time: Option<String>,

    /// Generate and summarize without writing the CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    #[arg(long = "summary-format", value_enum, default_value = "table")]
    pub summary_format: SummaryFormatArg,
}

impl GenerateArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            amount: self.amount,
            identity_pool_size: self.identity_pool_size,
            seed: self.seed,
            output: self.output.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            min_time: self.min_time.clone(),
            max_time: self.max_time.clone(),
            data: DataFiles {
                specialists: self.specialists.clone(),
                analyses: self.analyses.clone(),
                seasonality: self.seasonality.clone(),
                surnames: self.surnames.clone(),
                first_names: self.first_names.clone(),
                patronymics: self.patronymics.clone(),
            },
            bank_weights: self.bank_weights.clone(),
            payment_weights: self.payment_weights.clone(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
