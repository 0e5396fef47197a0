use std::time::Instant;

use anyhow::Result;
use comfy_table::{Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use medsynth_cli::config::{FileConfig, GenerationSettings};
use medsynth_cli::pipeline::run_generation;
use medsynth_cli::types::RunSummary;
use medsynth_core::{ISSUER_TABLE, validate_snils};

use crate::cli::GenerateArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_generate(args: &GenerateArgs) -> Result<RunSummary> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = GenerationSettings::resolve(file, args.overrides())?;
    let span = info_span!("generate_run", amount = settings.amount);
    let _guard = span.enter();
    let start = Instant::now();

    let progress = progress_bar(settings.amount, !args.no_progress);
    let outcome = run_generation(&settings, !args.dry_run, |done| {
        progress.set_position(done as u64);
    });
    progress.finish_and_clear();
    let outcome = outcome?;

    let summary = RunSummary::from_outcome(&outcome, start.elapsed());
    info!(
        rows = summary.records,
        duration_ms = summary.duration_ms,
        "generation complete"
    );
    Ok(summary)
}

pub fn run_issuers() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Network"),
        header_cell("Bank"),
        header_cell("Prefix"),
    ]);
    apply_table_style(&mut table);
    for row in ISSUER_TABLE {
        let bank = row.bank.map_or("(default)", |bank| bank.as_str());
        table.add_row(vec![
            Cell::new(row.network),
            Cell::new(bank),
            Cell::new(row.prefix),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_check_snils(value: &str) -> bool {
    let valid = validate_snils(value);
    if valid {
        println!("{value}: valid");
    } else {
        println!("{value}: invalid");
    }
    valid
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} records ({per_sec})")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
