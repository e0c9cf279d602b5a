//! Well Economics CLI
//!
//! Runs a single-well evaluation and writes the forecast table to CSV

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use well_economics::projection::DiscountCurve;
use well_economics::report::{format_display, write_csv};
use well_economics::well::loader::load_wells;
use well_economics::{Assumptions, EconomicsConfig, EconomicsEngine, Well};

#[derive(Parser, Debug)]
#[command(name = "well_economics", about = "Single-well reserves and economics evaluation")]
struct Args {
    /// Forecast horizon in months before truncation
    #[arg(long, default_value_t = 360)]
    months: u32,

    /// Annual discount rate (0.20 = PV-20%)
    #[arg(long, default_value_t = 0.20)]
    discount_rate: f64,

    /// Output CSV path
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Include WI volumes, capex components, and period PV in the export
    #[arg(long)]
    detailed: bool,

    /// Evaluation effective date (YYYY-MM-DD); adds a calendar month column
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Rows of the forecast table to print to the console
    #[arg(long, default_value_t = 24)]
    print_rows: usize,

    /// Optional well inventory CSV to evaluate from instead of the type well
    #[arg(long)]
    wells: Option<PathBuf>,

    /// Well id to pick out of the inventory
    #[arg(long)]
    well_id: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Well Economics v0.1.0");
    println!("=====================\n");

    let well = match &args.wells {
        Some(path) => {
            let wells = load_wells(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("loading wells from {}", path.display()))?;
            let first = wells.first().context("well inventory is empty")?;
            let well_id = args.well_id.unwrap_or(first.well_id);
            wells
                .into_iter()
                .find(|w| w.well_id == well_id)
                .with_context(|| format!("well {} not found in inventory", well_id))?
        }
        None => Well::reference_type_well(),
    };

    println!("Well: {} ({})", well.name, well.well_id);
    println!("  Oil curve:  qi={} b={} Di={}", well.oil.qi, well.oil.b, well.oil.di);
    println!("  Gas curve:  qi={} b={} Di={}", well.gas.qi, well.gas.b, well.gas.di);
    println!("  WI: {:.2}%  NRI: {:.2}%", well.ownership.wi * 100.0, well.ownership.nri() * 100.0);
    println!("  First production: month {}\n", well.first_prod_month);

    let assumptions = Assumptions::default_deck_for_first_prod(well.first_prod_month)?;
    let config = EconomicsConfig {
        horizon_months: args.months,
        discount_rate: args.discount_rate,
        detailed_output: args.detailed,
        effective_date: args.as_of,
        ..Default::default()
    };

    let engine = EconomicsEngine::new(assumptions, config.clone());
    let result = engine.evaluate(&well)?;

    let curve = DiscountCurve::new(args.discount_rate)?;
    println!("Forecast ({} economic months, {}):", result.rows.len(), curve.label());
    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Period", "Gross Oil", "Net Oil", "Revenue", "Expenses", "D&C", "Undisc CF", "Cum PV"
    );
    println!("{}", "-".repeat(100));

    for row in result.rows.iter().take(args.print_rows) {
        println!(
            "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
            row.period,
            format_display(row.gross_oil),
            format_display(row.net_oil),
            format_display(row.total_revenue),
            format_display(row.total_expenses),
            format_display(row.total_capex),
            format_display(row.undisc_cf),
            format_display(row.cum_pv),
        );
    }
    if result.rows.len() > args.print_rows {
        println!("... ({} more months)", result.rows.len() - args.print_rows);
    }

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "total",
        format_display(result.totals.gross_oil),
        format_display(result.totals.net_oil),
        format_display(result.totals.total_revenue),
        format_display(result.totals.total_expenses),
        format_display(result.totals.total_capex),
        format_display(result.totals.undisc_cf),
        "",
    );

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_csv(file, &result, &config)?;
    println!("\nFull table written to: {}", args.output.display());

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Economic life: {} months", summary.economic_life_months);
    println!("  Net oil: {} MBbls", format_display(summary.net_oil_mbbl));
    println!("  Net gas: {} MMcf", format_display(summary.net_gas_mmcf));
    println!("  Net NGL: {} MBbls", format_display(summary.net_ngl_mbbl));
    println!("  Total revenue: ${}k", format_display(summary.total_revenue));
    println!("  Total D&C: ${}k", format_display(summary.total_capex));
    println!("  Undiscounted CF: ${}k", format_display(summary.undisc_cf));
    println!("  NPV ({}): ${}k", curve.label(), format_display(summary.npv));
    match summary.irr {
        Some(irr) => println!("  Rate of return: {:.1}%", irr * 100.0),
        None => println!("  Rate of return: n/a"),
    }

    Ok(())
}
