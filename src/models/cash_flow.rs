//! A single periodic cash flow and its present value

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::{DiscountRate, Money};
use crate::error::{NpvError, Result};

/// Immutable (period, amount) pair. Period 0 is "now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlow {
    period: u32,
    amount: Money,
}

impl CashFlow {
    pub fn new(period: i64, amount: Money) -> Result<Self> {
        if period < 0 {
            return Err(NpvError::invalid("Period cannot be negative"));
        }
        let period = u32::try_from(period)
            .map_err(|_| NpvError::invalid(format!("Period {} is out of range", period)))?;

        Ok(Self { period, amount })
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    /// Discount this cash flow back to period 0 with annual compounding:
    /// `amount / (1 + rate)^period`, rounded to cents (midpoint to even).
    ///
    /// The discount factor is evaluated in f64 and converted back to a decimal
    /// before dividing, so the amount itself never passes through binary
    /// floating point.
    pub fn present_value(&self, rate: &DiscountRate) -> Result<Money> {
        let factor = self.discount_factor(rate)?;

        let pv = self.amount.amount().checked_div(factor).ok_or_else(|| {
            NpvError::Arithmetic(format!(
                "present value of period {} at {} is out of range",
                self.period, rate
            ))
        })?;

        Ok(self.amount.with_amount(pv.round_dp(2)))
    }

    fn discount_factor(&self, rate: &DiscountRate) -> Result<Decimal> {
        let base = Decimal::ONE
            .checked_add(rate.value())
            .and_then(|b| b.to_f64())
            .ok_or_else(|| NpvError::Arithmetic(format!("rate {} is not representable", rate)))?;

        let factor = base.powf(self.period as f64);

        Decimal::from_f64(factor)
            .filter(|f| !f.is_zero())
            .ok_or_else(|| {
                NpvError::Arithmetic(format!(
                    "discount factor {} for period {} at {} cannot be used",
                    factor, self.period, rate
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::usd(amount)
    }

    #[test]
    fn test_negative_period_rejected() {
        let err = CashFlow::new(-1, usd(dec!(100))).unwrap_err();
        assert_eq!(err, NpvError::invalid("Period cannot be negative"));
    }

    #[test]
    fn test_period_zero_is_face_value() {
        let cf = CashFlow::new(0, usd(dec!(-1000.555))).unwrap();
        let rate = DiscountRate::new(dec!(0.25)).unwrap();

        // rounds to cents, midpoint to even
        assert_eq!(cf.present_value(&rate).unwrap().amount(), dec!(-1000.56));
    }

    #[test]
    fn test_present_value_discounts() {
        let cf = CashFlow::new(2, usd(dec!(121))).unwrap();
        let rate = DiscountRate::new(dec!(0.10)).unwrap();

        let pv = cf.present_value(&rate).unwrap();
        assert_eq!(pv.amount(), dec!(100.00));
        assert_eq!(pv.currency(), "USD");
    }

    #[test]
    fn test_present_value_keeps_currency() {
        let cf = CashFlow::new(1, Money::new(dec!(110), "EUR").unwrap()).unwrap();
        let pv = cf.present_value(&DiscountRate::new(dec!(0.1)).unwrap()).unwrap();

        assert_eq!(pv.currency(), "EUR");
        assert_eq!(pv.amount(), dec!(100.00));
    }

    #[test]
    fn test_total_loss_rate_only_valid_at_period_zero() {
        let rate = DiscountRate::new(dec!(-1)).unwrap();

        let now = CashFlow::new(0, usd(dec!(50))).unwrap();
        assert_eq!(now.present_value(&rate).unwrap().amount(), dec!(50));

        let later = CashFlow::new(3, usd(dec!(50))).unwrap();
        assert!(matches!(later.present_value(&rate), Err(NpvError::Arithmetic(_))));
    }

    #[test]
    fn test_largest_rate_does_not_panic() {
        let rate = DiscountRate::new(DiscountRate::max_value()).unwrap();

        let next = CashFlow::new(1, usd(dec!(100))).unwrap();
        assert_eq!(next.present_value(&rate).unwrap().amount(), Decimal::ZERO);

        // factor no longer fits in a Decimal
        let later = CashFlow::new(2, usd(dec!(100))).unwrap();
        assert!(matches!(later.present_value(&rate), Err(NpvError::Arithmetic(_))));
    }
}
