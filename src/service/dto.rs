//! Transport objects for the calculation endpoint
//!
//! Field names are camelCase on the wire to match the browser client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for a ranged NPV calculation
///
/// Bounds and increment are percentages (`5` = 5%), not fractions. Cash-flow
/// amounts are indexed by period: the first entry is period 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpvCalculationRequest {
    /// Missing or null is treated as no cash flows
    #[serde(default)]
    pub cash_flows: Option<Vec<Decimal>>,

    pub lower_bound: Option<Decimal>,

    pub upper_bound: Option<Decimal>,

    /// Step between evaluated rates, in percentage points
    pub increment: Option<Decimal>,

    /// Missing or null falls back to the configured default currency
    #[serde(default)]
    pub currency: Option<String>,
}

impl NpvCalculationRequest {
    pub fn new(
        cash_flows: Vec<Decimal>,
        lower_bound: Decimal,
        upper_bound: Decimal,
        increment: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            cash_flows: Some(cash_flows),
            lower_bound: Some(lower_bound),
            upper_bound: Some(upper_bound),
            increment: Some(increment),
            currency: Some(currency.into()),
        }
    }

    pub fn cash_flow_amounts(&self) -> &[Decimal] {
        self.cash_flows.as_deref().unwrap_or(&[])
    }
}

/// NPV at one discount rate, flattened for transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpvResultItem {
    /// Fractional rate (0.05 = 5%)
    pub discount_rate: Decimal,
    pub npv: Decimal,
    /// Display form of the rate, e.g. `5.00%`
    pub formatted_rate: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpvCalculationMetadata {
    pub cash_flow_count: usize,
    pub calculation_count: usize,
    pub calculated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpvCalculationResult {
    pub results: Vec<NpvResultItem>,
    pub metadata: NpvCalculationMetadata,
}
