use crate::types::DepositError;

/// Trait for builders that produce a deposit product or configuration.
///
/// This creates a unified interface for object creation across the crate.
pub trait ProductBuilder<T> {
    /// Builds the final object, returning a Result.
    fn build(self) -> Result<T, DepositError>;
}

/// Trait for pre-build validation of builder state.
pub trait Validate {
    fn validate(&self) -> Result<(), DepositError>;
}
