use crate::config::DepositConfig;
use crate::types::{DepositDetails, DepositError, ValidationReport};

/// Trait to be implemented by all deposit balance calculators.
pub trait CalculateBalance {
    /// Validates the inputs against the product bounds.
    ///
    /// All fields are checked independently; the report carries every
    /// failing field, not just the first.
    fn validate(&self, config: &DepositConfig) -> ValidationReport;

    /// Projects the balance at the end of the term.
    ///
    /// Fails with [`DepositError::Validation`] when any input is out of
    /// bounds; no partial result is produced.
    fn calculate_balance(&self, config: &DepositConfig) -> Result<DepositDetails, DepositError>;

    /// Returns the label of the deposit, if any.
    fn get_label(&self) -> Option<String> {
        None
    }

    /// Returns the stable unique identifier for this deposit.
    fn get_id(&self) -> uuid::Uuid;
}
