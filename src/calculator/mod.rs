//! NPV calculation engine
//!
//! Two operations over a flat list of periodic cash flows with annual
//! compounding:
//! - **calculate**: NPV at a single discount rate
//! - **calculate_range**: NPV at every rate from a lower to an upper bound,
//!   stepping by a fixed increment in percentage points
//!
//! # Example
//!
//! ```rust
//! use npv_calculator::calculator::{NpvCalculator, NpvEngine};
//! use npv_calculator::models::{CashFlow, DiscountRate, Money};
//! use rust_decimal_macros::dec;
//!
//! let flows: Vec<CashFlow> = [dec!(-1000), dec!(500), dec!(500), dec!(500)]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &a)| CashFlow::new(i as i64, Money::usd(a)).unwrap())
//!     .collect();
//!
//! let npv = NpvEngine::new().calculate(&flows, &DiscountRate::zero()).unwrap();
//! assert_eq!(npv.net_present_value().amount(), dec!(500));
//! ```

mod engine;

pub use engine::{NpvEngine, DEFAULT_MAX_RANGE_POINTS, RANGE_EPSILON, RATE_DECIMAL_PLACES};

use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{CashFlow, DiscountRate, NpvCalculation};

/// Trait for NPV calculators
///
/// Implementations must be stateless so one instance can serve concurrent
/// requests.
pub trait NpvCalculator: Send + Sync {
    /// Net present value of `cash_flows` at `rate`
    fn calculate(&self, cash_flows: &[CashFlow], rate: &DiscountRate) -> Result<NpvCalculation>;

    /// NPV at each rate from `lower_bound` to `upper_bound` inclusive.
    /// `increment` is in percentage points (1 = 0.01).
    fn calculate_range(
        &self,
        cash_flows: &[CashFlow],
        lower_bound: &DiscountRate,
        upper_bound: &DiscountRate,
        increment: Decimal,
    ) -> Result<Vec<NpvCalculation>>;
}
