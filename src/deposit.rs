use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::config::DepositConfig;
use crate::frequency::CompoundingFrequency;
use crate::inputs::IntoDepositDecimal;
use crate::math::DepositDecimal;
use crate::traits::CalculateBalance;
use crate::types::{
    CalculationStep, CalculationTrace, DepositDetails, DepositError, InputField, ValidationReport,
};

/// A term deposit: principal, annual rate, term, and compounding schedule.
///
/// Immutable once passed to validation or calculation; each call is an
/// independent, deterministic projection with no memory of prior calls.
///
/// # Example
///
/// ```rust
/// use term_deposit::prelude::*;
///
/// let config = DepositConfig::default();
/// let deposit = TermDeposit::new()
///     .principal(10000)
///     .rate("5")
///     .term_months(12)
///     .frequency(CompoundingFrequency::Monthly);
///
/// let details = deposit.calculate_balance(&config).unwrap();
/// assert_eq!(details.format_balance(), "10511.62");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermDeposit {
    /// The opening deposit amount.
    pub principal: Decimal,
    /// Annual interest rate in percent (e.g. `5` for 5%).
    pub annual_rate_percent: Decimal,
    /// Investment term in months. Held as a decimal so raw host input is
    /// representable; validation requires a whole number.
    pub term_months: Decimal,
    pub frequency: CompoundingFrequency,
    /// Optional label for identifying this deposit in reports.
    pub label: Option<String>,
    pub id: uuid::Uuid,
}

impl TermDeposit {
    /// Creates an empty deposit to be filled in with the fluent setters.
    ///
    /// The zero defaults sit outside every product bound, so an untouched
    /// (or unparseable) field is reported as invalid rather than silently
    /// computed.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            ..Default::default()
        }
    }

    /// Strict constructor: rejects unparseable input outright instead of
    /// deferring to validation.
    pub fn try_new(
        principal: impl IntoDepositDecimal,
        annual_rate_percent: impl IntoDepositDecimal,
        term_months: impl IntoDepositDecimal,
        frequency: CompoundingFrequency,
    ) -> Result<Self, DepositError> {
        Ok(Self {
            principal: principal.into_deposit_decimal()?,
            annual_rate_percent: annual_rate_percent.into_deposit_decimal()?,
            term_months: term_months.into_deposit_decimal()?,
            frequency,
            label: None,
            id: uuid::Uuid::new_v4(),
        })
    }

    /// Sets the opening deposit amount. Unparseable input is dropped and
    /// the field stays at its (invalid) default.
    pub fn principal(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.principal = v;
        }
        self
    }

    /// Sets the annual interest rate in percent.
    pub fn rate(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.annual_rate_percent = v;
        }
        self
    }

    /// Sets the investment term in months.
    pub fn term_months(mut self, value: impl IntoDepositDecimal) -> Self {
        if let Ok(v) = value.into_deposit_decimal() {
            self.term_months = v;
        }
        self
    }

    pub fn frequency(mut self, frequency: CompoundingFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets an optional label for this deposit.
    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.label = Some(value.into());
        self
    }

    /// Convenience: the display-ready balance, rounded to 2 decimal places.
    pub fn final_balance(&self, config: &DepositConfig) -> Result<Decimal, DepositError> {
        Ok(self.calculate_balance(config)?.rounded_balance())
    }
}

impl CalculateBalance for TermDeposit {
    fn validate(&self, config: &DepositConfig) -> ValidationReport {
        let mut report = ValidationReport::default();

        let principal_floor = config.get_principal_floor();
        let principal_ceiling = config.get_principal_ceiling();
        if self.principal <= principal_floor || self.principal >= principal_ceiling {
            report.push(
                InputField::Principal,
                self.principal,
                format!(
                    "deposit amount must be greater than {} and less than {}",
                    principal_floor, principal_ceiling
                ),
            );
        }

        let rate_floor = config.get_rate_floor();
        let rate_ceiling = config.get_rate_ceiling();
        if self.annual_rate_percent <= rate_floor || self.annual_rate_percent >= rate_ceiling {
            report.push(
                InputField::Rate,
                self.annual_rate_percent,
                format!(
                    "interest rate must be greater than {}% and less than {}%",
                    rate_floor, rate_ceiling
                ),
            );
        }

        let term_min = Decimal::from(config.get_term_min_months());
        let term_max = Decimal::from(config.get_term_max_months());
        if !self.term_months.is_integer() {
            report.push(
                InputField::Term,
                self.term_months,
                "investment term must be a whole number of months",
            );
        } else if self.term_months < term_min || self.term_months > term_max {
            report.push(
                InputField::Term,
                self.term_months,
                format!(
                    "investment term must be between {} and {} months",
                    term_min, term_max
                ),
            );
        }

        report
    }

    fn calculate_balance(&self, config: &DepositConfig) -> Result<DepositDetails, DepositError> {
        config.validate()?;

        let report = self.validate(config);
        if !report.is_valid() {
            tracing::debug!(deposit = ?self.label, %report, "deposit rejected by validation");
            return Err(DepositError::Validation(report));
        }

        let principal = self.principal;
        let term_months = self.term_months.to_u32().ok_or_else(|| DepositError::Overflow {
            operation: format!("term {} as whole months", self.term_months),
            source_label: self.label.clone(),
        })?;

        // r = annual rate as a fraction, t = term in years.
        let rate = DepositDecimal::new(self.annual_rate_percent)
            .with_source(self.label.clone())
            .safe_div(dec!(100))?;
        let years = DepositDecimal::new(self.term_months)
            .with_source(self.label.clone())
            .safe_div(dec!(12))?;

        let mut trace = CalculationTrace::default();
        trace.push(CalculationStep::initial(
            "opening-principal",
            "Opening principal",
            principal,
        ));
        trace.push(CalculationStep::rate(
            "annual-rate",
            "Annual rate (fraction)",
            *rate,
        ));

        let final_balance = match self.frequency.periods_per_year() {
            None => {
                trace.push(CalculationStep::info(
                    "simple-interest",
                    "Interest paid once at maturity",
                ));
                // A = P * (1 + r * t)
                let growth = rate.safe_mul(*years)?.safe_add(Decimal::ONE)?;
                DepositDecimal::new(principal)
                    .with_source(self.label.clone())
                    .safe_mul(*growth)?
            }
            Some(n) => {
                trace.push(CalculationStep::info(
                    "compound-schedule",
                    format!("Compounded {} ({} periods per year)", self.frequency, n),
                ));
                // A = P * (1 + r / n) ^ (n * t)
                let periods = Decimal::from(n);
                let base = rate.safe_div(periods)?.safe_add(Decimal::ONE)?;
                let exponent = years.safe_mul(periods)?;
                let factor = base.safe_powd(*exponent)?;
                DepositDecimal::new(principal)
                    .with_source(self.label.clone())
                    .safe_mul(*factor)?
            }
        };

        let interest = final_balance.clone().safe_sub(principal)?;
        trace.push(CalculationStep::add(
            "interest-earned",
            "Interest earned",
            *interest,
        ));
        trace.push(CalculationStep::result(
            "final-balance",
            "Final balance",
            *final_balance,
        ));

        tracing::debug!(
            deposit = ?self.label,
            %principal,
            frequency = %self.frequency,
            final_balance = %*final_balance,
            "projected term deposit balance"
        );

        Ok(DepositDetails {
            principal,
            annual_rate_percent: self.annual_rate_percent,
            term_months,
            frequency: self.frequency,
            final_balance: *final_balance,
            interest_earned: *interest,
            label: self.label.clone(),
            calculation_trace: trace,
        })
    }

    fn get_label(&self) -> Option<String> {
        self.label.clone()
    }

    fn get_id(&self) -> uuid::Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DepositConfig {
        DepositConfig::default()
    }

    #[test]
    fn test_monthly_compounding() {
        // 10,000 at 5% for 12 months, monthly -> 10,511.62
        let deposit = TermDeposit::new()
            .principal(10000)
            .rate(5)
            .term_months(12)
            .frequency(CompoundingFrequency::Monthly);

        let details = deposit.calculate_balance(&config()).unwrap();
        assert_eq!(details.rounded_balance(), dec!(10511.62));
        assert_eq!(details.term_months, 12);
    }

    #[test]
    fn test_quarterly_compounding() {
        // 15,000 at 4% for 18 months, quarterly -> 15,922.80
        let deposit = TermDeposit::new()
            .principal(15000)
            .rate(4)
            .term_months(18)
            .frequency(CompoundingFrequency::Quarterly);

        let details = deposit.calculate_balance(&config()).unwrap();
        assert_eq!(details.rounded_balance(), dec!(15922.80));
    }

    #[test]
    fn test_at_maturity_is_exact_simple_interest() {
        // 20,000 at 3% for 24 months -> 20,000 * (1 + 0.03 * 2) = 21,200 exactly
        let deposit = TermDeposit::new()
            .principal(20000)
            .rate(3)
            .term_months(24)
            .frequency(CompoundingFrequency::AtMaturity);

        let details = deposit.calculate_balance(&config()).unwrap();
        assert_eq!(details.final_balance, dec!(21200));
        assert_eq!(details.rounded_balance(), dec!(21200.00));
        assert_eq!(details.interest_earned, dec!(1200));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let deposit = TermDeposit::new()
            .principal(-10000)
            .rate(5)
            .term_months(12)
            .frequency(CompoundingFrequency::Monthly);

        let report = deposit.validate(&config());
        assert!(report.principal_invalid());
        assert!(!report.rate_invalid());
        assert!(!report.term_invalid());

        let err = deposit.calculate_balance(&config()).unwrap_err();
        assert!(matches!(err, DepositError::Validation(_)));
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        let deposit = TermDeposit::new()
            .principal(10000)
            .rate(52)
            .term_months(12)
            .frequency(CompoundingFrequency::Monthly);

        let report = deposit.validate(&config());
        assert!(report.rate_invalid());
        assert!(!report.principal_invalid());
        assert!(deposit.calculate_balance(&config()).is_err());
    }

    #[test]
    fn test_term_out_of_range_rejected() {
        let deposit = TermDeposit::new()
            .principal(10000)
            .rate(2)
            .term_months(1)
            .frequency(CompoundingFrequency::Monthly);

        let report = deposit.validate(&config());
        assert!(report.term_invalid());
        assert!(deposit.calculate_balance(&config()).is_err());
    }

    #[test]
    fn test_boundary_values_are_exclusive_for_principal_and_rate() {
        // The bounds themselves are invalid; one step inside is valid.
        let at_floor = TermDeposit::new()
            .principal(1000)
            .rate(5)
            .term_months(12);
        assert!(at_floor.validate(&config()).principal_invalid());

        let at_ceiling = TermDeposit::new()
            .principal(1500000)
            .rate(5)
            .term_months(12);
        assert!(at_ceiling.validate(&config()).principal_invalid());

        let inside = TermDeposit::new()
            .principal(dec!(1000.01))
            .rate(dec!(14.99))
            .term_months(12);
        assert!(inside.validate(&config()).is_valid());

        let at_rate_ceiling = TermDeposit::new()
            .principal(10000)
            .rate(15)
            .term_months(12);
        assert!(at_rate_ceiling.validate(&config()).rate_invalid());
    }

    #[test]
    fn test_term_bounds_are_inclusive() {
        let three = TermDeposit::new().principal(10000).rate(5).term_months(3);
        assert!(three.validate(&config()).is_valid());

        let sixty = TermDeposit::new().principal(10000).rate(5).term_months(60);
        assert!(sixty.validate(&config()).is_valid());

        let sixty_one = TermDeposit::new().principal(10000).rate(5).term_months(61);
        assert!(sixty_one.validate(&config()).term_invalid());
    }

    #[test]
    fn test_fractional_term_rejected() {
        let deposit = TermDeposit::new()
            .principal(10000)
            .rate(5)
            .term_months(dec!(4.5));
        assert!(deposit.validate(&config()).term_invalid());
    }

    #[test]
    fn test_all_invalid_fields_reported_at_once() {
        let deposit = TermDeposit::new()
            .principal(500)
            .rate(52)
            .term_months(1)
            .frequency(CompoundingFrequency::Monthly);

        let report = deposit.validate(&config());
        assert!(report.principal_invalid());
        assert!(report.rate_invalid());
        assert!(report.term_invalid());
        assert_eq!(report.issues.len(), 3);
    }

    #[test]
    fn test_compounding_monotonicity() {
        // For fixed P, r > 0, t: more periods per year never yields less.
        let base = TermDeposit::new().principal(10000).rate(5).term_months(24);

        let annually = base
            .clone()
            .frequency(CompoundingFrequency::Annually)
            .calculate_balance(&config())
            .unwrap();
        let quarterly = base
            .clone()
            .frequency(CompoundingFrequency::Quarterly)
            .calculate_balance(&config())
            .unwrap();
        let monthly = base
            .clone()
            .frequency(CompoundingFrequency::Monthly)
            .calculate_balance(&config())
            .unwrap();

        assert!(quarterly.final_balance >= annually.final_balance);
        assert!(monthly.final_balance >= quarterly.final_balance);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let deposit = TermDeposit::new()
            .principal(12345)
            .rate(dec!(7.25))
            .term_months(37)
            .frequency(CompoundingFrequency::Monthly);

        let first = deposit.calculate_balance(&config()).unwrap();
        let second = deposit.calculate_balance(&config()).unwrap();
        assert_eq!(first.final_balance, second.final_balance);
        assert_eq!(first.calculation_trace, second.calculation_trace);
    }

    #[test]
    fn test_custom_bounds_shift_the_domain() {
        let wide = DepositConfig::default()
            .with_principal_bounds(100, 5000000)
            .unwrap();

        let small = TermDeposit::new().principal(500).rate(5).term_months(12);
        assert!(small.validate(&config()).principal_invalid());
        assert!(small.validate(&wide).is_valid());
    }

    #[test]
    fn test_try_new_rejects_non_numeric() {
        let err = TermDeposit::try_new("abc", 5, 12, CompoundingFrequency::Monthly).unwrap_err();
        assert!(matches!(err, DepositError::NotNumeric { .. }));
    }

    #[test]
    fn test_unparseable_setter_input_fails_that_field() {
        // The parse failure leaves the field at its zero default, which the
        // validator reports against the same field.
        let deposit = TermDeposit::new()
            .principal("not-a-number")
            .rate(5)
            .term_months(12);

        let report = deposit.validate(&config());
        assert!(report.principal_invalid());
        assert!(!report.rate_invalid());
    }

    #[test]
    fn test_details_carry_label_and_trace() {
        let deposit = TermDeposit::new()
            .principal(10000)
            .rate(5)
            .term_months(12)
            .frequency(CompoundingFrequency::Monthly)
            .label("Holiday fund");

        let details = deposit.calculate_balance(&config()).unwrap();
        assert_eq!(details.label.as_deref(), Some("Holiday fund"));
        assert!(!details.calculation_trace.is_empty());
        assert_eq!(
            details.interest_earned,
            details.final_balance - details.principal
        );
    }
}
