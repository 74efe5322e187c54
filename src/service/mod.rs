//! Request/response mapping between transport and the NPV engine

pub mod dto;
mod npv_service;
mod validation;

pub use dto::{NpvCalculationMetadata, NpvCalculationRequest, NpvCalculationResult, NpvResultItem};
pub use npv_service::{build_cash_flows, to_result_item, NpvCalculationService};
pub use validation::validate_request;

use crate::error::Result;

/// Runs a ranged NPV calculation for a transport request
///
/// Errors from the engine are logged and returned unchanged; callers decide
/// how to present them.
pub trait CalculationService: Send + Sync {
    fn calculate_npv_range(&self, request: &NpvCalculationRequest) -> Result<NpvCalculationResult>;
}
