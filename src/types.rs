use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frequency::CompoundingFrequency;
use crate::inputs::IntoDepositDecimal;

/// Identifies which deposit input a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputField {
    /// The opening deposit amount.
    Principal,
    /// The annual interest rate, in percent.
    Rate,
    /// The investment term, in months.
    Term,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum DepositError {
    /// Raw input could not be coerced into a number at all.
    #[error("not a number: `{value}` ({reason})")]
    NotNumeric {
        value: String,
        reason: String,
        source_label: Option<String>,
    },
    /// One or more inputs fell outside the configured product bounds.
    /// Carries every failing field; no balance is produced.
    #[error("validation failed: {0}")]
    Validation(ValidationReport),
    #[error("arithmetic overflow in `{operation}`")]
    Overflow {
        operation: String,
        source_label: Option<String>,
    },
    #[error("configuration error: {reason}")]
    Configuration { reason: String },
}

impl DepositError {
    /// Attaches the label of the deposit that produced this error.
    pub fn with_source(self, source: impl Into<String>) -> Self {
        match self {
            DepositError::NotNumeric { value, reason, .. } => DepositError::NotNumeric {
                value,
                reason,
                source_label: Some(source.into()),
            },
            DepositError::Overflow { operation, .. } => DepositError::Overflow {
                operation,
                source_label: Some(source.into()),
            },
            other => other,
        }
    }
}

/// A single out-of-range or non-numeric input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: InputField,
    /// The offending value as supplied.
    pub value: String,
    /// Human-readable reason, suitable for display next to the field.
    pub reason: String,
}

/// Outcome of validating a deposit: every failing field, independently.
///
/// All three fields are checked on every call. A deposit with an invalid
/// rate *and* an invalid term reports both issues at once, so a form can
/// flag each field in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn field_invalid(&self, field: InputField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    pub fn principal_invalid(&self) -> bool {
        self.field_invalid(InputField::Principal)
    }

    pub fn rate_invalid(&self) -> bool {
        self.field_invalid(InputField::Rate)
    }

    pub fn term_invalid(&self) -> bool {
        self.field_invalid(InputField::Term)
    }

    /// Reason reported for `field`, if it failed.
    pub fn reason_for(&self, field: InputField) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.reason.as_str())
    }

    pub(crate) fn push(
        &mut self,
        field: InputField,
        value: impl ToString,
        reason: impl Into<String>,
    ) {
        self.issues.push(ValidationIssue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        });
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "all inputs valid");
        }
        let joined = self
            .issues
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.reason))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// The kind of operation a calculation step performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Initial,
    Add,
    Rate,
    Info,
    Result,
}

/// One step in the balance derivation.
///
/// Steps make the projection auditable: a host can render the trace next
/// to the final balance so the user sees how the number was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Stable identifier for the step (e.g. "final-balance").
    pub id: String,
    pub description: String,
    pub amount: Option<Decimal>,
    pub operation: Operation,
}

impl CalculationStep {
    fn with_amount(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: impl IntoDepositDecimal,
        operation: Operation,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount: amount.into_deposit_decimal().ok(),
            operation,
        }
    }

    pub fn initial(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: impl IntoDepositDecimal,
    ) -> Self {
        Self::with_amount(id, description, amount, Operation::Initial)
    }

    pub fn add(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: impl IntoDepositDecimal,
    ) -> Self {
        Self::with_amount(id, description, amount, Operation::Add)
    }

    pub fn rate(
        id: impl Into<String>,
        description: impl Into<String>,
        rate: impl IntoDepositDecimal,
    ) -> Self {
        Self::with_amount(id, description, rate, Operation::Rate)
    }

    pub fn result(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: impl IntoDepositDecimal,
    ) -> Self {
        Self::with_amount(id, description, amount, Operation::Result)
    }

    pub fn info(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount: None,
            operation: Operation::Info,
        }
    }
}

/// Ordered list of calculation steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationTrace(pub Vec<CalculationStep>);

impl CalculationTrace {
    pub fn push(&mut self, step: CalculationStep) {
        self.0.push(step);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculationStep> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The projected outcome of a term deposit.
///
/// `final_balance` keeps the full internal precision; rounding to the
/// two-decimal display value happens only in [`DepositDetails::rounded_balance`]
/// and [`DepositDetails::format_balance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositDetails {
    /// The opening deposit amount.
    pub principal: Decimal,
    /// Annual interest rate in percent, as supplied.
    pub annual_rate_percent: Decimal,
    /// Investment term in whole months.
    pub term_months: u32,
    /// How often interest is folded back into the principal.
    pub frequency: CompoundingFrequency,
    /// Principal plus all accrued interest at the end of the term.
    pub final_balance: Decimal,
    /// final_balance - principal.
    pub interest_earned: Decimal,
    /// Optional label identifying this deposit (e.g. "Holiday fund").
    pub label: Option<String>,
    /// Step-by-step derivation of the final balance.
    pub calculation_trace: CalculationTrace,
}

impl DepositDetails {
    /// Final balance rounded to 2 decimal places for display.
    pub fn rounded_balance(&self) -> Decimal {
        self.final_balance
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns the final balance formatted with exactly 2 decimal places.
    pub fn format_balance(&self) -> String {
        format!("{:.2}", self.rounded_balance())
    }

    /// Interest earned rounded to 2 decimal places for display.
    pub fn rounded_interest(&self) -> Decimal {
        self.interest_earned
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns a concise status string.
    /// Format: "{Label}: {term}-month deposit at {rate}% ({frequency}) - Final: {balance}"
    pub fn summary(&self) -> String {
        let label = self.label.as_deref().unwrap_or("Deposit");
        format!(
            "{}: {}-month deposit at {}% ({}) - Final: {}",
            label,
            self.term_months,
            self.annual_rate_percent,
            self.frequency,
            self.format_balance()
        )
    }

    /// Generates a human-readable explanation of the balance projection.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Deposit");

        writeln!(&mut output, "Projection for '{}' ({}):", label, self.frequency).unwrap();
        writeln!(&mut output, "{:-<50}", "").unwrap();

        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in self.calculation_trace.iter() {
            let op_symbol = match step.operation {
                Operation::Initial => " ",
                Operation::Add => "+",
                Operation::Rate => "x",
                Operation::Result => "=",
                Operation::Info => " ",
            };

            match (step.operation, step.amount) {
                (Operation::Info, _) => {
                    writeln!(&mut output, "  INFO: {}", step.description).unwrap();
                }
                (Operation::Rate, Some(amount)) => {
                    // Rates carry more precision than currency amounts.
                    writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>12}",
                        step.description,
                        op_symbol,
                        format!("{:.4}", amount),
                        width = max_desc_len
                    )
                    .unwrap();
                }
                (_, Some(amount)) => {
                    writeln!(
                        &mut output,
                        "  {:<width$} : {} {:>12}",
                        step.description,
                        op_symbol,
                        format!("{:.2}", amount),
                        width = max_desc_len
                    )
                    .unwrap();
                }
                (_, None) => {
                    writeln!(
                        &mut output,
                        "  {:<width$} : [No Amount]",
                        step.description,
                        width = max_desc_len
                    )
                    .unwrap();
                }
            }
        }

        writeln!(&mut output, "{:-<50}", "").unwrap();
        writeln!(&mut output, "Final Balance: {}", self.format_balance()).unwrap();
        writeln!(
            &mut output,
            "Interest Earned: {:.2}",
            self.rounded_interest()
        )
        .unwrap();

        output
    }
}

impl std::fmt::Display for DepositDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.label.as_deref().unwrap_or("Deposit");
        writeln!(
            f,
            "Deposit: {} ({} over {} months)",
            label, self.frequency, self.term_months
        )?;
        writeln!(
            f,
            "Principal: {} | Rate: {}%",
            self.principal, self.annual_rate_percent
        )?;
        write!(f, "Final Balance: {}", self.format_balance())
    }
}
