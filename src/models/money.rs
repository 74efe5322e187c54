//! Monetary amounts tagged with a currency code

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{NpvError, Result};

/// Currency applied when a caller does not name one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Immutable amount + currency pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Create a money value; the currency code must be non-empty
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Result<Self> {
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(NpvError::invalid("Currency is required"));
        }

        Ok(Self { amount, currency })
    }

    /// Money in the default currency (USD)
    pub fn usd(amount: Decimal) -> Self {
        Self {
            amount,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sum two values of the same currency
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        if self.currency != other.currency {
            return Err(NpvError::IncompatibleCurrency {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| NpvError::Arithmetic("money addition overflowed".to_string()))?;

        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Same currency, different amount
    pub(crate) fn with_amount(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount.round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_requires_currency() {
        assert!(Money::new(dec!(10), "").is_err());
        assert!(Money::new(dec!(10), "   ").is_err());

        let money = Money::new(dec!(10), "EUR").unwrap();
        assert_eq!(money.currency(), "EUR");
        assert_eq!(money.amount(), dec!(10));
    }

    #[test]
    fn test_usd_default() {
        assert_eq!(Money::usd(dec!(1)).currency(), DEFAULT_CURRENCY);
    }

    #[test]
    fn test_add_same_currency() {
        let a = Money::new(dec!(100.25), "USD").unwrap();
        let b = Money::new(dec!(-40.10), "USD").unwrap();

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum, Money::usd(dec!(60.15)));
    }

    #[test]
    fn test_add_different_currency_fails() {
        let a = Money::new(dec!(1), "USD").unwrap();
        let b = Money::new(dec!(1), "EUR").unwrap();

        match a.checked_add(&b) {
            Err(NpvError::IncompatibleCurrency { left, right }) => {
                assert_eq!(left, "USD");
                assert_eq!(right, "EUR");
            }
            other => panic!("expected currency mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_add_overflow() {
        let a = Money::usd(Decimal::MAX);
        assert!(matches!(a.checked_add(&a), Err(NpvError::Arithmetic(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::usd(dec!(137.2)).to_string(), "USD 137.20");
        assert_eq!(Money::new(dec!(-5), "GBP").unwrap().to_string(), "GBP -5.00");
    }
}
