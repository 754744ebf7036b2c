use rust_decimal_macros::dec;
use term_deposit::prelude::*;

// Helper to print results consistently
fn print_case(title: &str, result: Result<DepositDetails, DepositError>) {
    println!("\n=== {} ===", title);
    match result {
        Ok(details) => {
            if let Some(label) = &details.label {
                println!("Label        : {}", label);
            }
            println!("Principal    : ${}", details.principal);
            println!("Rate         : {}% ({})", details.annual_rate_percent, details.frequency);
            println!("Term         : {} months", details.term_months);
            println!("FINAL BALANCE: ${}", details.format_balance());
        }
        Err(e) => println!("Rejected: {}", e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = DepositConfig::default();

    // CASE 1: The regular saver.
    // $10,000 at 5% for a year, compounded monthly -> $10,511.62.
    let saver = TermDeposit::new()
        .principal(10000)
        .rate(5)
        .term_months(12)
        .frequency(CompoundingFrequency::Monthly)
        .label("Rainy day fund");
    print_case("Case 1: Regular saver (monthly)", saver.calculate_balance(&config));

    // CASE 2: The conservative retiree.
    // $250,000 at 4.2% for 5 years, interest paid quarterly.
    let retiree = TermDeposit::new()
        .principal(250000)
        .rate(dec!(4.2))
        .term_months(60)
        .frequency(CompoundingFrequency::Quarterly)
        .label("Retirement ladder rung 3");
    print_case("Case 2: Retiree (quarterly)", retiree.calculate_balance(&config));

    // CASE 3: Short-dated parking, paid at maturity.
    // $20,000 at 3% for 24 months, simple interest -> exactly $21,200.00.
    let parked = TermDeposit::new()
        .principal(20000)
        .rate(3)
        .term_months(24)
        .frequency(CompoundingFrequency::AtMaturity)
        .label("Settlement float");
    print_case("Case 3: Parked funds (at maturity)", parked.calculate_balance(&config));

    // CASE 4: Fat-fingered form input. Rate 52% is out of the product's
    // range, term 1 month is too short. Both fields are reported at once.
    let typo = TermDeposit::new()
        .principal(10000)
        .rate(52)
        .term_months(1)
        .frequency(CompoundingFrequency::Monthly);
    print_case("Case 4: Out-of-range inputs", typo.calculate_balance(&config));

    // CASE 5: Full derivation trace for an auditor.
    let audited = TermDeposit::new()
        .principal(15000)
        .rate(4)
        .term_months(18)
        .frequency(CompoundingFrequency::Quarterly)
        .label("Audited deposit");
    if let Ok(details) = audited.calculate_balance(&config) {
        println!("\n{}", details.explain());
    }

    Ok(())
}
