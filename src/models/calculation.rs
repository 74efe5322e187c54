//! Result of evaluating NPV at one discount rate

use chrono::{DateTime, Utc};

use super::{DiscountRate, Money};

#[derive(Debug, Clone)]
pub struct NpvCalculation {
    discount_rate: DiscountRate,
    net_present_value: Money,
    calculated_at: DateTime<Utc>,
}

impl NpvCalculation {
    /// Stamp a result with the current UTC time
    pub fn new(discount_rate: DiscountRate, net_present_value: Money) -> Self {
        Self {
            discount_rate,
            net_present_value,
            calculated_at: Utc::now(),
        }
    }

    pub fn discount_rate(&self) -> &DiscountRate {
        &self.discount_rate
    }

    pub fn net_present_value(&self) -> &Money {
        &self.net_present_value
    }

    pub fn calculated_at(&self) -> DateTime<Utc> {
        self.calculated_at
    }
}
