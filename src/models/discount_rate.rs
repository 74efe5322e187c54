//! Discount rates expressed as fractions (0.05 = 5%)

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{NpvError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate {
    value: Decimal,
}

impl DiscountRate {
    /// Create a rate from a fraction. Rates below -1 (losing more than
    /// everything) are rejected, as are rates whose percentage does not fit
    /// in a `Decimal`.
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::NEGATIVE_ONE {
            return Err(NpvError::invalid("Discount rate cannot be less than -100%"));
        }
        if value > Self::max_value() {
            return Err(NpvError::invalid("Discount rate is too large"));
        }

        Ok(Self { value })
    }

    /// Create a rate from a percentage (5 -> 0.05)
    pub fn from_percentage(percentage: Decimal) -> Result<Self> {
        Self::new(percentage / Decimal::ONE_HUNDRED)
    }

    /// Zero discount rate
    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    /// Largest accepted fraction
    pub fn max_value() -> Decimal {
        Decimal::MAX / Decimal::ONE_HUNDRED
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn percentage(&self) -> Decimal {
        self.value * Decimal::ONE_HUNDRED
    }
}

/// Two-decimal percentage with a trailing `%`, e.g. `5.00%`
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self
            .percentage()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_format() {
        assert_eq!(DiscountRate::new(dec!(0.05)).unwrap().to_string(), "5.00%");
        assert_eq!(DiscountRate::new(dec!(0.0025)).unwrap().to_string(), "0.25%");
        assert_eq!(DiscountRate::new(dec!(1)).unwrap().to_string(), "100.00%");
        assert_eq!(DiscountRate::zero().to_string(), "0.00%");
        assert_eq!(DiscountRate::new(dec!(-0.5)).unwrap().to_string(), "-50.00%");
    }

    #[test]
    fn test_display_rounds_to_two_places() {
        assert_eq!(DiscountRate::new(dec!(0.000125)).unwrap().to_string(), "0.01%");
        assert_eq!(DiscountRate::new(dec!(0.123456)).unwrap().to_string(), "12.35%");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        // 0.125% and 2.345% sit exactly on a midpoint
        assert_eq!(DiscountRate::new(dec!(0.00125)).unwrap().to_string(), "0.13%");
        assert_eq!(DiscountRate::new(dec!(-0.00125)).unwrap().to_string(), "-0.13%");
        assert_eq!(DiscountRate::new(dec!(0.02345)).unwrap().to_string(), "2.35%");
    }

    #[test]
    fn test_from_percentage() {
        let rate = DiscountRate::from_percentage(dec!(5)).unwrap();
        assert_eq!(rate.value(), dec!(0.05));
        assert_eq!(rate.percentage(), dec!(5));
    }

    #[test]
    fn test_lower_limit() {
        assert!(DiscountRate::new(dec!(-1)).is_ok());
        assert!(DiscountRate::new(dec!(-1.0001)).is_err());
        assert!(DiscountRate::from_percentage(dec!(-150)).is_err());
    }

    #[test]
    fn test_upper_limit() {
        let max = DiscountRate::new(DiscountRate::max_value()).unwrap();
        assert_eq!(max.percentage(), Decimal::MAX);
        assert!(max.to_string().ends_with('%'));

        assert_eq!(
            DiscountRate::new(Decimal::MAX).unwrap_err(),
            NpvError::invalid("Discount rate is too large")
        );
        assert!(DiscountRate::new(Decimal::MAX / dec!(10)).is_err());
        assert!(DiscountRate::from_percentage(Decimal::MAX).is_ok());
    }
}
