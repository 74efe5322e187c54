//! Form-level checks on a calculation request
//!
//! Stricter than the engine: bounds must lie within 0-100% and the increment
//! may not exceed 100 points. Used by front ends before submitting; the engine
//! still applies its own checks.

use rust_decimal::Decimal;

use super::dto::NpvCalculationRequest;

/// Collect every problem with `request`, empty when it can be submitted
pub fn validate_request(request: &NpvCalculationRequest) -> Vec<String> {
    let mut errors = Vec::new();
    let hundred = Decimal::ONE_HUNDRED;
    let in_range = |v: Decimal| v >= Decimal::ZERO && v <= hundred;

    if request.cash_flow_amounts().is_empty() {
        errors.push("At least one cash flow is required".to_string());
    }

    match request.lower_bound {
        Some(lower) if in_range(lower) => {}
        _ => errors.push("Lower bound must be between 0 and 100".to_string()),
    }

    match request.upper_bound {
        Some(upper) if in_range(upper) => {}
        _ => errors.push("Upper bound must be between 0 and 100".to_string()),
    }

    if let (Some(lower), Some(upper)) = (request.lower_bound, request.upper_bound) {
        if upper < lower {
            errors.push("Upper bound must be greater than or equal to lower bound".to_string());
        }
    }

    match request.increment {
        Some(inc) if inc > Decimal::ZERO && inc <= hundred => {}
        _ => errors.push("Increment must be positive and less than or equal to 100".to_string()),
    }

    if matches!(request.currency.as_deref(), Some(c) if c.trim().is_empty()) {
        errors.push("Currency is required".to_string());
    }

    errors
}
