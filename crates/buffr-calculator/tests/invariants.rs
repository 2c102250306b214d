//! # Pricing Invariants
//!
//! Property tests over the full quotable domain: fee composition, total
//! payable composition, the even split, processing fee bounds, the 1/3
//! rule, formatting totality, and schedule conservation.

use buffr_calculator::{
    calculate_fees, calculate_interest, calculate_loan_details, format_currency,
    repayment_schedule, validate_loan_term, validate_salary_compliance,
};
use buffr_core::policy::{MAX_PROCESSING_FEE, MIN_PROCESSING_FEE};
use buffr_core::Money;
use chrono::NaiveDate;
use proptest::prelude::*;

/// Quotable principals, in cents.
fn loan_cents() -> impl Strategy<Value = i64> {
    50_000i64..=1_000_000
}

fn term_months() -> impl Strategy<Value = u32> {
    1u32..=5
}

proptest! {
    #[test]
    fn total_fees_is_sum_of_parts(cents in 0i64..=100_000_000) {
        let fees = calculate_fees(Money::from_cents(cents)).unwrap();
        let sum = fees.processing_fee.cents() + fees.namfisa_levy.cents() + fees.stamp_duty.cents();
        prop_assert_eq!(fees.total_fees.cents(), sum);
    }

    #[test]
    fn processing_fee_within_bounds(cents in 0i64..=100_000_000) {
        let fee = calculate_fees(Money::from_cents(cents)).unwrap().processing_fee;
        prop_assert!(fee >= MIN_PROCESSING_FEE);
        prop_assert!(fee <= MAX_PROCESSING_FEE);
    }

    #[test]
    fn total_payable_composition(cents in loan_cents(), term in term_months()) {
        let amount = Money::from_cents(cents);
        let details = calculate_loan_details(amount, term).unwrap();
        let expected = amount.cents()
            + calculate_interest(amount).unwrap().cents()
            + calculate_fees(amount).unwrap().total_fees.cents();
        prop_assert_eq!(details.total_payable.cents(), expected);
    }

    #[test]
    fn monthly_payment_is_rounded_even_split(cents in loan_cents(), term in term_months()) {
        let details = calculate_loan_details(Money::from_cents(cents), term).unwrap();
        let exact = details.total_payable.cents() as f64 / f64::from(term);
        prop_assert!((details.monthly_payment.cents() as f64 - exact).abs() <= 0.5);
        if details.total_payable.cents() % i64::from(term) == 0 {
            prop_assert_eq!(
                details.monthly_payment.cents() * i64::from(term),
                details.total_payable.cents()
            );
        }
    }

    #[test]
    fn one_third_rule(loan in 0i64..=10_000_000, salary in 1i64..=10_000_000) {
        let result = validate_salary_compliance(
            Money::from_cents(loan),
            Money::from_cents(salary),
        ).unwrap();
        prop_assert_eq!(result.is_compliant, loan * 3 <= salary);
        prop_assert_eq!(result.is_compliant, loan <= result.max_loan_amount.cents());
    }

    #[test]
    fn format_currency_is_total(value in any::<f64>()) {
        let formatted = format_currency(value);
        prop_assert!(formatted.starts_with("N$"));
    }

    #[test]
    fn validate_loan_term_is_total(value in any::<f64>()) {
        let result = validate_loan_term(value);
        prop_assert_eq!(result.is_valid, result.error.is_none());
    }

    #[test]
    fn schedule_sums_to_total(cents in loan_cents(), term in term_months()) {
        let details = calculate_loan_details(Money::from_cents(cents), term).unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let schedule = repayment_schedule(&details, start).unwrap();
        let sum: i64 = schedule.installments.iter().map(|i| i.amount.cents()).sum();
        prop_assert_eq!(sum, details.total_payable.cents());
        prop_assert_eq!(schedule.installments.len() as u32, term);
        let last = schedule.installments.last().unwrap();
        prop_assert_eq!(last.remaining_balance, Money::ZERO);
    }
}

// -- End-to-end scenarios --

#[test]
fn scenario_quotes() {
    let details = calculate_loan_details(Money::from_units(5000), 3).unwrap();
    assert_eq!(details.buffr_fee_amount, Money::from_units(750));
    assert_eq!(details.user_total_fees, Money::from_units(265));
    assert_eq!(details.total_payable, Money::from_units(6015));
    assert_eq!(details.monthly_payment, Money::from_units(2005));

    let details = calculate_loan_details(Money::from_units(2000), 1).unwrap();
    assert_eq!(details.total_payable, Money::from_units(2415));
    assert_eq!(details.monthly_payment, Money::from_units(2415));

    let err = calculate_loan_details(Money::from_units(100), 3).unwrap_err();
    assert_eq!(err.to_string(), "Loan amount must be at least N$500");
}

#[test]
fn scenario_affordability_and_formatting() {
    let result =
        validate_salary_compliance(Money::from_units(5000), Money::from_units(15_000)).unwrap();
    assert!(result.is_compliant);
    assert_eq!(result.max_loan_amount, Money::from_units(5000));
    assert!((result.compliance_percentage - 33.333).abs() < 0.001);

    assert_eq!(format_currency(1000.0), "N$1,000");
    assert_eq!(format_currency(f64::NAN), "N$0");
}
