pub mod builder;
pub mod config;
pub mod deposit;
pub mod frequency;
pub mod inputs;
pub mod math;
pub mod prelude;
pub mod traits;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::DepositConfig;
pub use deposit::TermDeposit;
pub use frequency::CompoundingFrequency;
pub use traits::CalculateBalance;
pub use types::{DepositDetails, DepositError, ValidationReport};
