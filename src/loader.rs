//! Load cash-flow series from CSV or from a comma-separated argument
//!
//! One series per CSV row. A leading non-numeric field names the series;
//! the remaining fields are the amounts for periods 0, 1, 2, ...
//! A first row with no numeric fields is treated as a header and skipped.
//!
//! ```text
//! name,p0,p1,p2,p3
//! plant_a,-1000,500,500,500
//! plant_b,-2500,900,900,900,900
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read cash flows: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid amount '{value}' on line {line}")]
    InvalidAmount { line: u64, value: String },

    #[error("No cash flows found")]
    Empty,
}

/// A named list of cash-flow amounts, index = period
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlowSeries {
    pub name: String,
    pub amounts: Vec<Decimal>,
}

/// Load every series from a CSV file
pub fn load_cash_flow_series(path: &Path) -> Result<Vec<CashFlowSeries>, LoaderError> {
    let file = File::open(path)?;
    read_cash_flow_series(file)
}

pub fn read_cash_flow_series<R: Read>(input: R) -> Result<Vec<CashFlowSeries>, LoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(input);

    let mut series = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);

        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        if idx == 0 && fields.iter().all(|f| Decimal::from_str(f).is_err()) {
            continue;
        }

        let (name, values) = match Decimal::from_str(fields[0]) {
            Ok(_) => (format!("series-{}", series.len() + 1), &fields[..]),
            Err(_) => (fields[0].to_string(), &fields[1..]),
        };

        let amounts = values
            .iter()
            .map(|v| parse_amount(v, line))
            .collect::<Result<Vec<_>, _>>()?;

        series.push(CashFlowSeries { name, amounts });
    }

    if series.is_empty() {
        return Err(LoaderError::Empty);
    }

    Ok(series)
}

/// Parse `-1000,300,300` into amounts
pub fn parse_cash_flow_list(list: &str) -> Result<Vec<Decimal>, LoaderError> {
    let amounts = list
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| parse_amount(v, 1))
        .collect::<Result<Vec<_>, _>>()?;

    if amounts.is_empty() {
        return Err(LoaderError::Empty);
    }

    Ok(amounts)
}

fn parse_amount(value: &str, line: u64) -> Result<Decimal, LoaderError> {
    Decimal::from_str(value).map_err(|_| LoaderError::InvalidAmount {
        line,
        value: value.to_string(),
    })
}
