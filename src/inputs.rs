use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::DepositError;

/// Trait for converting various types into `Decimal` for deposit inputs.
///
/// This lets callers pass `i32`, `f64`, `&str`, etc. directly into
/// constructors and setters without wrapping them in `dec!()` or
/// `Decimal::from()`. A browser host hands over raw text; parse failure
/// surfaces as [`DepositError::NotNumeric`].
pub trait IntoDepositDecimal {
    fn into_deposit_decimal(self) -> Result<Decimal, DepositError>;
}

// Passthrough
impl IntoDepositDecimal for Decimal {
    fn into_deposit_decimal(self) -> Result<Decimal, DepositError> {
        Ok(self)
    }
}

macro_rules! impl_into_deposit_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoDepositDecimal for $t {
                fn into_deposit_decimal(self) -> Result<Decimal, DepositError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_deposit_decimal_int!(i32, u32, i64, u64, isize, usize);

macro_rules! impl_into_deposit_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoDepositDecimal for $t {
                fn into_deposit_decimal(self) -> Result<Decimal, DepositError> {
                    Decimal::from_f64_retain(self as f64).ok_or_else(|| {
                        DepositError::NotNumeric {
                            value: self.to_string(),
                            reason: "float is not representable as a decimal".to_string(),
                            source_label: None,
                        }
                    })
                }
            }
        )*
    };
}

impl_into_deposit_decimal_float!(f32, f64);

impl IntoDepositDecimal for &str {
    fn into_deposit_decimal(self) -> Result<Decimal, DepositError> {
        Decimal::from_str(self.trim()).map_err(|e| DepositError::NotNumeric {
            value: self.to_string(),
            reason: e.to_string(),
            source_label: None,
        })
    }
}

impl IntoDepositDecimal for String {
    fn into_deposit_decimal(self) -> Result<Decimal, DepositError> {
        self.as_str().into_deposit_decimal()
    }
}
