use rust_decimal::{Decimal, MathematicalOps};
use std::ops::Deref;

use crate::types::DepositError;

/// Checked wrapper over [`Decimal`] for balance arithmetic.
///
/// Every operation surfaces [`DepositError::Overflow`] instead of
/// panicking, and carries an optional source label so an error can name
/// the deposit it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositDecimal {
    value: Decimal,
    source: Option<String>,
}

impl DepositDecimal {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            source: None,
        }
    }

    /// Labels subsequent arithmetic errors with the deposit they belong to.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    fn overflow(&self, operation: impl Into<String>) -> DepositError {
        DepositError::Overflow {
            operation: operation.into(),
            source_label: self.source.clone(),
        }
    }

    fn wrap(self, value: Decimal) -> Self {
        Self {
            value,
            source: self.source,
        }
    }

    pub fn safe_add(self, rhs: Decimal) -> Result<Self, DepositError> {
        match self.value.checked_add(rhs) {
            Some(v) => Ok(self.wrap(v)),
            None => Err(self.overflow(format!("{} + {}", self.value, rhs))),
        }
    }

    pub fn safe_sub(self, rhs: Decimal) -> Result<Self, DepositError> {
        match self.value.checked_sub(rhs) {
            Some(v) => Ok(self.wrap(v)),
            None => Err(self.overflow(format!("{} - {}", self.value, rhs))),
        }
    }

    pub fn safe_mul(self, rhs: Decimal) -> Result<Self, DepositError> {
        match self.value.checked_mul(rhs) {
            Some(v) => Ok(self.wrap(v)),
            None => Err(self.overflow(format!("{} * {}", self.value, rhs))),
        }
    }

    pub fn safe_div(self, rhs: Decimal) -> Result<Self, DepositError> {
        match self.value.checked_div(rhs) {
            Some(v) => Ok(self.wrap(v)),
            None => Err(self.overflow(format!("{} / {}", self.value, rhs))),
        }
    }

    /// Raises the value to a (possibly fractional) decimal exponent.
    pub fn safe_powd(self, exponent: Decimal) -> Result<Self, DepositError> {
        match self.value.checked_powd(exponent) {
            Some(v) => Ok(self.wrap(v)),
            None => Err(self.overflow(format!("{} ^ {}", self.value, exponent))),
        }
    }
}

impl Deref for DepositDecimal {
    type Target = Decimal;

    fn deref(&self) -> &Decimal {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_chained_arithmetic() {
        // (5 / 100 / 12 + 1) -> one month's growth factor
        let factor = DepositDecimal::new(dec!(5))
            .safe_div(dec!(100))
            .unwrap()
            .safe_div(dec!(12))
            .unwrap()
            .safe_add(Decimal::ONE)
            .unwrap();
        assert!(*factor > Decimal::ONE);
    }

    #[test]
    fn test_powd_integral_exponent() {
        let factor = DepositDecimal::new(dec!(1.01)).safe_powd(dec!(6)).unwrap();
        assert_eq!((*factor).round_dp(12), dec!(1.061520150601));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let err = DepositDecimal::new(dec!(1)).safe_div(Decimal::ZERO).unwrap_err();
        assert!(matches!(err, DepositError::Overflow { .. }));
    }

    #[test]
    fn test_overflow_carries_source_label() {
        let err = DepositDecimal::new(Decimal::MAX)
            .with_source(Some("Big deposit".to_string()))
            .safe_mul(dec!(2))
            .unwrap_err();
        match err {
            DepositError::Overflow { source_label, .. } => {
                assert_eq!(source_label.as_deref(), Some("Big deposit"));
            }
            other => panic!("expected overflow, got {:?}", other),
        }
    }
}
