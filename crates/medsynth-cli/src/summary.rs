use std::collections::BTreeMap;

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use medsynth_cli::types::RunSummary;

use crate::cli::SummaryFormatArg;

pub fn print_summary(summary: &RunSummary, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        SummaryFormatArg::Table => print_tables(summary),
    }
    Ok(())
}

fn print_tables(summary: &RunSummary) {
    match &summary.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }
    println!("Seed: {}", summary.seed);

    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    totals.add_row(vec![Cell::new("Records"), Cell::new(summary.records)]);
    totals.add_row(vec![Cell::new("Persons"), Cell::new(summary.identities)]);
    totals.add_row(vec![Cell::new("Specialists"), Cell::new(summary.specialists)]);
    totals.add_row(vec![
        Cell::new("Total cost"),
        Cell::new(format!("{:.2}", summary.total_cost)),
    ]);
    totals.add_row(vec![
        Cell::new("Mean cost"),
        Cell::new(format!("{:.2}", summary.mean_cost)),
    ]);
    totals.add_row(vec![
        Cell::new("Duration"),
        dim_cell(format!("{} ms", summary.duration_ms)),
    ]);
    println!("{totals}");

    print_distribution("Specialist", &summary.by_specialist, summary.records);
    print_distribution("Network", &summary.by_network, summary.records);
    print_distribution("Bank", &summary.by_bank, summary.records);
}

fn print_distribution(label: &str, counts: &BTreeMap<String, usize>, total: usize) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Records"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut ordered: Vec<(&String, &usize)> = counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (name, count) in ordered {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count),
            dim_cell(format!("{:.1}%", share(*count, total))),
        ]);
    }
    println!("{table}");
}

fn share(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
