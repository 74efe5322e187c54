//! Value objects: money, discount rates, cash flows and calculation results

mod money;
mod discount_rate;
mod cash_flow;
mod calculation;

pub use money::{Money, DEFAULT_CURRENCY};
pub use discount_rate::DiscountRate;
pub use cash_flow::CashFlow;
pub use calculation::NpvCalculation;
