//! Maps transport requests onto the engine and results back to transport

use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use rust_decimal::Decimal;

use super::dto::{NpvCalculationMetadata, NpvCalculationRequest, NpvCalculationResult, NpvResultItem};
use super::CalculationService;
use crate::calculator::{NpvCalculator, NpvEngine};
use crate::config::ServiceConfig;
use crate::error::{NpvError, Result};
use crate::models::{CashFlow, DiscountRate, Money, NpvCalculation};

/// Default service: builds value objects from a request and runs a range sweep
#[derive(Clone)]
pub struct NpvCalculationService {
    calculator: Arc<dyn NpvCalculator>,
    default_currency: String,
}

impl NpvCalculationService {
    pub fn new(calculator: Arc<dyn NpvCalculator>, config: &ServiceConfig) -> Self {
        Self {
            calculator,
            default_currency: config.default_currency.clone(),
        }
    }

    /// Service backed by the standard engine
    pub fn with_engine(config: &ServiceConfig) -> Self {
        let engine = NpvEngine::with_max_range_points(config.max_range_points);
        Self::new(Arc::new(engine), config)
    }

    fn run(&self, request: &NpvCalculationRequest) -> Result<NpvCalculationResult> {
        let currency = request
            .currency
            .as_deref()
            .unwrap_or(&self.default_currency);

        let cash_flows = build_cash_flows(request.cash_flow_amounts(), currency)?;

        let (lower, upper) = match (request.lower_bound, request.upper_bound) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => return Err(NpvError::MissingArgument("Bounds cannot be null")),
        };
        let increment = request
            .increment
            .ok_or(NpvError::MissingArgument("Increment is required"))?;

        let lower_bound = DiscountRate::from_percentage(lower)?;
        let upper_bound = DiscountRate::from_percentage(upper)?;

        let calculations =
            self.calculator
                .calculate_range(&cash_flows, &lower_bound, &upper_bound, increment)?;

        let results: Vec<NpvResultItem> = calculations.iter().map(to_result_item).collect();

        Ok(NpvCalculationResult {
            metadata: NpvCalculationMetadata {
                cash_flow_count: cash_flows.len(),
                calculation_count: results.len(),
                calculated_at: Utc::now(),
            },
            results,
        })
    }
}

impl Default for NpvCalculationService {
    fn default() -> Self {
        Self::with_engine(&ServiceConfig::default())
    }
}

impl CalculationService for NpvCalculationService {
    fn calculate_npv_range(&self, request: &NpvCalculationRequest) -> Result<NpvCalculationResult> {
        info!(
            "Starting NPV calculation for {} cash flows",
            request.cash_flow_amounts().len()
        );

        self.run(request).map_err(|e| {
            error!("Error calculating NPV range: {}", e);
            e
        })
    }
}

/// One cash flow per amount; the index is the period
pub fn build_cash_flows(amounts: &[Decimal], currency: &str) -> Result<Vec<CashFlow>> {
    amounts
        .iter()
        .enumerate()
        .map(|(period, &amount)| CashFlow::new(period as i64, Money::new(amount, currency)?))
        .collect()
}

pub fn to_result_item(calculation: &NpvCalculation) -> NpvResultItem {
    let rate = calculation.discount_rate();
    let npv = calculation.net_present_value();

    NpvResultItem {
        discount_rate: rate.value(),
        npv: npv.amount(),
        formatted_rate: rate.to_string(),
        currency: npv.currency().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(amounts: Vec<Decimal>, lower: Decimal, upper: Decimal, inc: Decimal) -> NpvCalculationRequest {
        NpvCalculationRequest::new(amounts, lower, upper, inc, "USD")
    }

    #[test]
    fn test_maps_sweep_to_result_items() {
        let service = NpvCalculationService::default();
        let req = request(vec![dec!(-1000), dec!(500), dec!(500), dec!(500)], dec!(5), dec!(15), dec!(1));

        let result = service.calculate_npv_range(&req).unwrap();

        assert_eq!(result.results.len(), 11);
        assert_eq!(result.metadata.cash_flow_count, 4);
        assert_eq!(result.metadata.calculation_count, 11);

        let first = &result.results[0];
        assert_eq!(first.discount_rate, dec!(0.05));
        assert_eq!(first.formatted_rate, "5.00%");
        assert_eq!(first.currency, "USD");
        assert!(first.npv > Decimal::ZERO);

        let last = result.results.last().unwrap();
        assert_eq!(last.formatted_rate, "15.00%");
    }

    #[test]
    fn test_currency_carried_through() {
        let service = NpvCalculationService::default();
        let req = NpvCalculationRequest::new(vec![dec!(-10), dec!(11)], dec!(10), dec!(10), dec!(1), "JPY");

        let result = service.calculate_npv_range(&req).unwrap();
        assert_eq!(result.results[0].currency, "JPY");
        assert_eq!(result.results[0].npv, dec!(0));
    }

    #[test]
    fn test_point_limit_from_config() {
        let config = ServiceConfig {
            max_range_points: 5,
            ..Default::default()
        };
        let service = NpvCalculationService::with_engine(&config);

        let err = service
            .calculate_npv_range(&request(vec![dec!(100)], dec!(0), dec!(10), dec!(1)))
            .unwrap_err();
        assert!(err.is_client_error());

        let ok = service
            .calculate_npv_range(&request(vec![dec!(100)], dec!(0), dec!(4), dec!(1)))
            .unwrap();
        assert_eq!(ok.metadata.calculation_count, 5);
    }

    #[test]
    fn test_default_currency_from_config() {
        let config = ServiceConfig {
            default_currency: "CHF".to_string(),
            ..Default::default()
        };
        let service = NpvCalculationService::with_engine(&config);
        let req = NpvCalculationRequest {
            currency: None,
            ..request(vec![dec!(100)], dec!(0), dec!(0), dec!(1))
        };

        let result = service.calculate_npv_range(&req).unwrap();
        assert_eq!(result.results[0].currency, "CHF");
    }

    #[test]
    fn test_blank_currency_rejected() {
        let service = NpvCalculationService::default();
        let req = NpvCalculationRequest {
            currency: Some(String::new()),
            ..request(vec![dec!(100)], dec!(0), dec!(1), dec!(1))
        };

        let err = service.calculate_npv_range(&req).unwrap_err();
        assert_eq!(err, NpvError::invalid("Currency is required"));
    }

    #[test]
    fn test_missing_bounds_and_increment() {
        let service = NpvCalculationService::default();

        let no_lower = NpvCalculationRequest {
            lower_bound: None,
            ..request(vec![dec!(100)], dec!(0), dec!(1), dec!(1))
        };
        assert_eq!(
            service.calculate_npv_range(&no_lower).unwrap_err(),
            NpvError::MissingArgument("Bounds cannot be null")
        );

        let no_increment = NpvCalculationRequest {
            increment: None,
            ..request(vec![dec!(100)], dec!(0), dec!(1), dec!(1))
        };
        assert!(matches!(
            service.calculate_npv_range(&no_increment),
            Err(NpvError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_engine_errors_propagate() {
        let service = NpvCalculationService::default();

        let empty = request(vec![], dec!(1), dec!(5), dec!(1));
        assert_eq!(
            service.calculate_npv_range(&empty).unwrap_err(),
            NpvError::invalid("Cash flows cannot be null or empty")
        );

        let inverted = request(vec![dec!(1)], dec!(10), dec!(5), dec!(1));
        assert!(service.calculate_npv_range(&inverted).unwrap_err().is_client_error());

        let bad_rate = request(vec![dec!(1)], dec!(-200), dec!(5), dec!(1));
        assert_eq!(
            service.calculate_npv_range(&bad_rate).unwrap_err(),
            NpvError::invalid("Discount rate cannot be less than -100%")
        );
    }

    #[test]
    fn test_build_cash_flows_indexes_periods() {
        let flows = build_cash_flows(&[dec!(-5), dec!(6), dec!(7)], "USD").unwrap();

        let periods: Vec<u32> = flows.iter().map(|cf| cf.period()).collect();
        assert_eq!(periods, vec![0, 1, 2]);
        assert_eq!(flows[2].amount(), &Money::usd(dec!(7)));
    }
}
