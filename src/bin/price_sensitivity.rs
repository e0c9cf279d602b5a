//! Price-deck and discount-rate sensitivity grid
//!
//! Re-evaluates one well across an oil-price x discount-rate grid. Cells are
//! independent single-well runs, so the grid is evaluated in parallel.
//! Supports CSV output or a JSON summary via --json.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use well_economics::well::loader::load_wells;
use well_economics::{Assumptions, EconomicsConfig, PriceDeck, ScenarioRunner, Well};

#[derive(Parser, Debug)]
#[command(name = "price_sensitivity", about = "Oil price x discount rate sensitivity grid")]
struct Args {
    /// Benchmark oil prices to sweep ($/Bbl)
    #[arg(long, value_delimiter = ',', default_value = "50,65,80,95,110")]
    oil_prices: Vec<f64>,

    /// Annual discount rates to sweep
    #[arg(long, value_delimiter = ',', default_value = "0.10,0.15,0.20,0.25")]
    discount_rates: Vec<f64>,

    /// Forecast horizon in months
    #[arg(long, default_value_t = 360)]
    months: u32,

    /// Emit a JSON summary instead of writing the CSV
    #[arg(long)]
    json: bool,

    /// Output CSV path
    #[arg(long, default_value = "sensitivity_output.csv")]
    output: PathBuf,

    /// Optional well inventory CSV; defaults to the reference type well
    #[arg(long)]
    wells: Option<PathBuf>,

    /// Well id to pick out of the inventory
    #[arg(long)]
    well_id: Option<u32>,
}

/// One evaluated grid cell
#[derive(Debug, Clone, Serialize)]
struct GridCell {
    oil_price: f64,
    discount_rate: f64,
    economic_life_months: u32,
    undisc_cf: f64,
    npv: f64,
    irr: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SensitivityResponse {
    well_id: u32,
    well_name: String,
    cells: Vec<GridCell>,
    execution_time_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let well = match &args.wells {
        Some(path) => {
            let wells = load_wells(path).map_err(|e| anyhow::anyhow!("{e}"))?;
            let first = wells.first().context("well inventory is empty")?;
            let well_id = args.well_id.unwrap_or(first.well_id);
            wells
                .into_iter()
                .find(|w| w.well_id == well_id)
                .with_context(|| format!("well {} not found in inventory", well_id))?
        }
        None => Well::reference_type_well(),
    };

    let assumptions = Assumptions::default_deck_for_first_prod(well.first_prod_month)?;
    let runner = ScenarioRunner::with_assumptions(assumptions);

    let grid: Vec<(f64, f64)> = args
        .oil_prices
        .iter()
        .flat_map(|&price| args.discount_rates.iter().map(move |&rate| (price, rate)))
        .collect();

    log::info!("evaluating {} grid cells for well {}", grid.len(), well.well_id);

    let cells: Vec<GridCell> = grid
        .par_iter()
        .map(|&(oil_price, discount_rate)| {
            let deck = PriceDeck {
                oil_price,
                ..runner.assumptions().prices
            };
            let config = EconomicsConfig {
                horizon_months: args.months,
                discount_rate,
                ..Default::default()
            };
            let result = runner.run_with_deck(&well, deck, config)?;
            let summary = result.summary();

            Ok(GridCell {
                oil_price,
                discount_rate,
                economic_life_months: summary.economic_life_months,
                undisc_cf: summary.undisc_cf,
                npv: summary.npv,
                irr: summary.irr,
            })
        })
        .collect::<Result<_, well_economics::ConfigError>>()?;

    if args.json {
        let response = SensitivityResponse {
            well_id: well.well_id,
            well_name: well.name.clone(),
            cells,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    // NPV matrix on the console, one row per oil price
    println!("NPV ($000s) for {} ({})\n", well.name, well.well_id);
    print!("{:>10}", "Oil $/Bbl");
    for rate in &args.discount_rates {
        print!("{:>14}", format!("PV-{:.0}%", rate * 100.0));
    }
    println!();
    for price in &args.oil_prices {
        print!("{:>10.2}", price);
        for rate in &args.discount_rates {
            let cell = cells
                .iter()
                .find(|c| c.oil_price == *price && c.discount_rate == *rate)
                .expect("every grid cell was evaluated");
            print!("{:>14.1}", cell.npv);
        }
        println!();
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut file = std::io::BufWriter::new(file);
    writeln!(file, "oil_price,discount_rate,economic_life_months,undisc_cf,npv,irr")?;
    for cell in &cells {
        writeln!(
            file,
            "{},{},{},{:.6},{:.6},{}",
            cell.oil_price,
            cell.discount_rate,
            cell.economic_life_months,
            cell.undisc_cf,
            cell.npv,
            cell.irr.map_or(String::new(), |irr| format!("{:.6}", irr)),
        )?;
    }

    println!("\nGrid written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
