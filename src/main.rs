//! NPV Calculator CLI
//!
//! Sweeps NPV across a range of discount rates for one or more cash-flow
//! series and prints the results or writes them to CSV.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use npv_calculator::loader::{load_cash_flow_series, parse_cash_flow_list, CashFlowSeries};
use npv_calculator::service::{
    validate_request, CalculationService, NpvCalculationRequest, NpvCalculationResult,
    NpvCalculationService,
};
use npv_calculator::ServiceConfig;

/// Cash flows used when none are supplied
const DEFAULT_CASH_FLOWS: &str = "-1000,300,300,300,300,300";

#[derive(Parser, Debug)]
#[command(name = "npv_calculator", version, about = "Net present value across a range of discount rates")]
struct Args {
    /// Comma-separated amounts, first entry is period 0
    #[arg(long, allow_hyphen_values = true, conflicts_with = "input")]
    cash_flows: Option<String>,

    /// CSV file with one cash-flow series per row
    #[arg(long)]
    input: Option<PathBuf>,

    /// Lowest discount rate, in percent
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    lower: Decimal,

    /// Highest discount rate, in percent
    #[arg(long, default_value = "15", allow_hyphen_values = true)]
    upper: Decimal,

    /// Step between rates, in percentage points
    #[arg(long, default_value = "0.25", allow_hyphen_values = true)]
    increment: Decimal,

    #[arg(long, default_value = "USD")]
    currency: String,

    /// Write every (series, rate) row to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SeriesOutput<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a NpvCalculationResult,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    series: &'a str,
    discount_rate: Decimal,
    formatted_rate: &'a str,
    npv: Decimal,
    currency: &'a str,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let series = load_series(&args)?;

    let requests: Vec<(String, NpvCalculationRequest)> = series
        .into_iter()
        .map(|s| {
            let request = NpvCalculationRequest::new(
                s.amounts,
                args.lower,
                args.upper,
                args.increment,
                args.currency.clone(),
            );
            (s.name, request)
        })
        .collect();

    for (name, request) in &requests {
        let errors = validate_request(request);
        if !errors.is_empty() {
            bail!("{}: {}", name, errors.join(". "));
        }
    }

    let config = ServiceConfig {
        default_currency: args.currency.clone(),
        ..ServiceConfig::default()
    };
    let service = NpvCalculationService::with_engine(&config);

    let start = Instant::now();

    // Series are independent; sweep them in parallel
    let outcomes: Vec<_> = requests
        .par_iter()
        .map(|(name, request)| (name.as_str(), service.calculate_npv_range(request)))
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    for (name, outcome) in outcomes {
        let result = outcome.with_context(|| format!("NPV calculation failed for {}", name))?;
        results.push((name, result));
    }

    info!("Calculated {} series in {:?}", results.len(), start.elapsed());

    if args.json {
        let out: Vec<SeriesOutput> = results
            .iter()
            .map(|(name, result)| SeriesOutput { name: *name, result })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (name, result) in &results {
            print_table(name, result);
        }
    }

    if let Some(path) = &args.output {
        write_csv(path, &results)?;
        println!("\nResults written to: {}", path.display());
    }

    Ok(())
}

fn load_series(args: &Args) -> anyhow::Result<Vec<CashFlowSeries>> {
    if let Some(path) = &args.input {
        return load_cash_flow_series(path)
            .with_context(|| format!("Unable to load cash flows from {}", path.display()));
    }

    let list = args.cash_flows.as_deref().unwrap_or(DEFAULT_CASH_FLOWS);
    let amounts = parse_cash_flow_list(list).context("Unable to parse --cash-flows")?;

    Ok(vec![CashFlowSeries {
        name: "cash-flows".to_string(),
        amounts,
    }])
}

fn print_table(name: &str, result: &NpvCalculationResult) {
    println!(
        "\n{} ({} cash flows, {} rates)",
        name, result.metadata.cash_flow_count, result.metadata.calculation_count
    );
    println!("{:>10} {:>18}", "Rate", "NPV");
    println!("{}", "-".repeat(29));

    for item in &result.results {
        let npv = format!("{} {:.2}", item.currency, item.npv);
        println!("{:>10} {:>18}", item.formatted_rate, npv);
    }
}

fn write_csv(path: &Path, results: &[(&str, NpvCalculationResult)]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to create {}", path.display()))?;

    for (name, result) in results {
        for item in &result.results {
            writer.serialize(CsvRow {
                series: *name,
                discount_rate: item.discount_rate,
                formatted_rate: &item.formatted_rate,
                npv: item.npv,
                currency: &item.currency,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
