//! Core NPV engine: single-rate NPV and ranged rate sweeps

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::NpvCalculator;
use crate::error::{NpvError, Result};
use crate::models::{CashFlow, DiscountRate, NpvCalculation};

/// Slack added to the upper bound so it is always included in a sweep
pub const RANGE_EPSILON: Decimal = dec!(0.0001);

/// Decimal places a swept rate is rounded to before use
pub const RATE_DECIMAL_PLACES: u32 = 4;

/// Default upper limit on rate points in one sweep. A 0% to 100% sweep in
/// steps of 0.0001 points is 1 000 001 points.
pub const DEFAULT_MAX_RANGE_POINTS: u64 = 2_000_000;

/// Stateless calculator; safe to share between concurrent requests
#[derive(Debug, Clone, Copy)]
pub struct NpvEngine {
    max_range_points: u64,
}

impl NpvEngine {
    pub fn new() -> Self {
        Self::with_max_range_points(DEFAULT_MAX_RANGE_POINTS)
    }

    pub fn with_max_range_points(max_range_points: u64) -> Self {
        Self { max_range_points }
    }

    pub fn max_range_points(&self) -> u64 {
        self.max_range_points
    }
}

impl Default for NpvEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NpvCalculator for NpvEngine {
    fn calculate(&self, cash_flows: &[CashFlow], rate: &DiscountRate) -> Result<NpvCalculation> {
        let (first, rest) = cash_flows
            .split_first()
            .ok_or_else(|| NpvError::invalid("Cash flows cannot be null or empty"))?;

        let total = rest
            .iter()
            .try_fold(first.present_value(rate)?, |acc, cf| {
                acc.checked_add(&cf.present_value(rate)?)
            })?;

        Ok(NpvCalculation::new(*rate, total))
    }

    fn calculate_range(
        &self,
        cash_flows: &[CashFlow],
        lower_bound: &DiscountRate,
        upper_bound: &DiscountRate,
        increment: Decimal,
    ) -> Result<Vec<NpvCalculation>> {
        if lower_bound.value() > upper_bound.value() {
            return Err(NpvError::invalid(
                "Lower bound must be less than or equal to upper bound",
            ));
        }

        if increment <= Decimal::ZERO {
            return Err(NpvError::invalid("Increment must be positive"));
        }

        // Increment is in percentage points
        let step = increment / Decimal::ONE_HUNDRED;
        if step.is_zero() {
            return Err(NpvError::invalid("Increment is too small"));
        }

        let limit = upper_bound
            .value()
            .checked_add(RANGE_EPSILON)
            .ok_or_else(|| NpvError::Arithmetic("upper bound of sweep overflowed".to_string()))?;
        let points = expected_points(lower_bound.value(), limit, step, self.max_range_points)?;

        let mut results = Vec::with_capacity(points as usize);
        let mut current = lower_bound.value();

        while current <= limit {
            let rate = DiscountRate::new(current.round_dp(RATE_DECIMAL_PLACES))?;
            results.push(self.calculate(cash_flows, &rate)?);

            current = current
                .checked_add(step)
                .ok_or_else(|| NpvError::Arithmetic("rate sweep overflowed".to_string()))?;
        }

        debug!(
            "Swept {} rates from {} to {} over {} cash flows",
            results.len(),
            lower_bound,
            upper_bound,
            cash_flows.len()
        );

        Ok(results)
    }
}

/// Number of rate points a sweep from `lower` up to `limit` will produce,
/// rejecting sweeps longer than `max_points`
fn expected_points(lower: Decimal, limit: Decimal, step: Decimal, max_points: u64) -> Result<u64> {
    let too_many = || {
        NpvError::invalid(format!(
            "Range would produce more than {} calculations; use a larger increment",
            max_points
        ))
    };

    let span = limit
        .checked_sub(lower)
        .ok_or_else(|| NpvError::Arithmetic("sweep span overflowed".to_string()))?
        .checked_div(step)
        .ok_or_else(too_many)?
        .floor();

    let points = span
        .to_u64()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(too_many)?;
    if points > max_points {
        return Err(too_many());
    }

    Ok(points)
}
