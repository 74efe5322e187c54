//! NPV Calculator - net present value across a range of discount rates
//!
//! This library provides:
//! - Value objects for money, discount rates, cash flows and results
//! - A stateless NPV engine (single rate and ranged sweeps)
//! - Request/response mapping for the HTTP service
//! - The Lambda HTTP handler and CSV cash-flow loading

pub mod error;
pub mod config;
pub mod models;
pub mod calculator;
pub mod service;
pub mod api;
pub mod loader;

// Re-export commonly used types
pub use error::{NpvError, Result};
pub use config::ServiceConfig;
pub use models::{CashFlow, DiscountRate, Money, NpvCalculation};
pub use calculator::{NpvCalculator, NpvEngine};
pub use service::{CalculationService, NpvCalculationService};
pub use api::NpvApi;
