use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How often accrued interest is folded back into the principal.
///
/// `AtMaturity` means interest is computed once, simply, at the end of the
/// term rather than compounded periodically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    Annually,
    #[default]
    #[serde(alias = "maturity")]
    AtMaturity,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year, or `None` for interest paid
    /// once at maturity (simple interest, never fed into the compound
    /// formula).
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            CompoundingFrequency::Monthly => Some(12),
            CompoundingFrequency::Quarterly => Some(4),
            CompoundingFrequency::Annually => Some(1),
            CompoundingFrequency::AtMaturity => None,
        }
    }
}
