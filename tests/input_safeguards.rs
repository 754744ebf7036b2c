use rust_decimal_macros::dec;
use term_deposit::prelude::*;

#[test]
fn test_labeling_workflow() {
    let config = DepositConfig::default();

    let deposit_a = TermDeposit::new()
        .principal(10000)
        .rate(5)
        .term_months(12)
        .frequency(CompoundingFrequency::Monthly)
        .label("Emergency fund");

    let deposit_b = TermDeposit::new()
        .principal(25000)
        .rate(dec!(3.5))
        .term_months(36)
        .frequency(CompoundingFrequency::Quarterly)
        .label("House deposit");

    let details_a = deposit_a.calculate_balance(&config).unwrap();
    let details_b = deposit_b.calculate_balance(&config).unwrap();

    assert_eq!(details_a.label, Some("Emergency fund".to_string()));
    assert_eq!(details_b.label, Some("House deposit".to_string()));
    assert_ne!(deposit_a.get_id(), deposit_b.get_id());
}

#[test]
fn test_sanitization_negative_principal() {
    let config = DepositConfig::default();
    let deposit = TermDeposit::new()
        .principal(-10000)
        .rate(5)
        .term_months(12)
        .frequency(CompoundingFrequency::Monthly);

    let report = deposit.validate(&config);
    assert!(report.principal_invalid());

    let err = deposit.calculate_balance(&config).unwrap_err();
    match err {
        DepositError::Validation(report) => assert!(report.principal_invalid()),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_sanitization_non_numeric_text() {
    // A text field handed over raw. The parse failure leaves the field at
    // its zero default and validation reports it against the same field.
    let config = DepositConfig::default();
    let deposit = TermDeposit::new()
        .principal("twelve grand")
        .rate("5")
        .term_months("12");

    let report = deposit.validate(&config);
    assert!(report.principal_invalid());
    assert!(!report.rate_invalid());
    assert!(!report.term_invalid());
}

#[test]
fn test_strict_constructor_rejects_text() {
    let res = TermDeposit::try_new("", "5", "12", CompoundingFrequency::Monthly);
    assert!(matches!(res, Err(DepositError::NotNumeric { .. })));
}

#[test]
fn test_every_invalid_field_reported_in_one_pass() {
    // A form with a bad rate AND a bad term shows both errors on first
    // submission, not one at a time.
    let config = DepositConfig::default();
    let deposit = TermDeposit::new()
        .principal(10000)
        .rate(52)
        .term_months(1)
        .frequency(CompoundingFrequency::Monthly);

    let report = deposit.validate(&config);
    assert!(!report.principal_invalid());
    assert!(report.rate_invalid());
    assert!(report.term_invalid());
    assert_eq!(report.issues.len(), 2);

    let rendered = report.to_string();
    assert!(rendered.contains("rate"));
    assert!(rendered.contains("term"));
}

#[test]
fn test_no_partial_result_for_invalid_input() {
    let config = DepositConfig::default();
    let deposit = TermDeposit::new()
        .principal(500)
        .rate(5)
        .term_months(12)
        .frequency(CompoundingFrequency::Monthly);

    assert!(deposit.final_balance(&config).is_err());
}

#[test]
fn test_validation_reasons_name_the_bounds() {
    let config = DepositConfig::default();
    let deposit = TermDeposit::new().principal(500).rate(5).term_months(12);

    let report = deposit.validate(&config);
    let reason = report.reason_for(InputField::Principal).unwrap();
    assert!(reason.contains("1000"));
    assert!(reason.contains("1500000"));
}
