//! Prelude module for the term-deposit crate
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use term_deposit::prelude::*;
//! ```

// Core exports
pub use crate::config::{DepositConfig, DepositConfigBuilder};
pub use crate::deposit::TermDeposit;
pub use crate::frequency::CompoundingFrequency;
pub use crate::traits::CalculateBalance;
pub use crate::types::{
    DepositDetails, DepositError, InputField, ValidationIssue, ValidationReport,
};

// Construction helpers
pub use crate::builder::{ProductBuilder, Validate};
pub use crate::inputs::IntoDepositDecimal;
