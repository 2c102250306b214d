//! # buffr-calculator: BuffrLend Loan Cost Calculator
//!
//! Pure, stateless pricing for BuffrLend short-term salary loans. Every
//! function is synchronous, performs no I/O, and may be called from any
//! number of threads without coordination.
//!
//! ## Operations
//!
//! | Function                          | Policy   | Module                |
//! |-----------------------------------|----------|-----------------------|
//! | [`calculate_interest`]            | strict   | [`fees`]              |
//! | [`calculate_fees`]                | strict   | [`fees`]              |
//! | [`calculate_monthly_payment`]     | strict   | [`quote`]             |
//! | [`calculate_loan_details`]        | strict   | [`quote`]             |
//! | [`validate_salary_compliance`]    | strict   | [`affordability`]     |
//! | [`format_currency`]               | lenient  | [`format`]            |
//! | [`validate_loan_amount`]          | lenient  | [`validation`]        |
//! | [`validate_loan_term`]            | lenient  | [`validation`]        |
//! | [`repayment_schedule`]            | strict   | [`schedule`]          |
//!
//! Strict functions return `Result<_, LoanCalculationError>`. Lenient
//! functions never fail: validators carry the error inside their result
//! so a form can show inline guidance, and `into_result()` collapses them
//! back into the strict policy when needed.
//!
//! ## Example
//!
//! ```
//! use buffr_calculator::calculate_loan_details;
//! use buffr_core::Money;
//!
//! let details = calculate_loan_details(Money::from_units(5000), 3).unwrap();
//! assert_eq!(details.total_payable, Money::from_units(6015));
//! assert_eq!(details.monthly_payment.to_string(), "N$2,005");
//! ```

pub mod affordability;
pub mod fees;
pub mod format;
pub mod quote;
pub mod schedule;
pub mod validation;

pub use affordability::{validate_salary_compliance, SalaryComplianceResult};
pub use fees::{calculate_fees, calculate_interest, processing_fee, FeeBreakdown};
pub use format::format_currency;
pub use quote::{calculate_loan_details, calculate_monthly_payment, quote, LoanDetails};
pub use schedule::{first_due_date_for, repayment_schedule, Installment, RepaymentSchedule};
pub use validation::{
    validate_loan_amount, validate_loan_term, validate_money_amount, validate_term_months,
    AmountValidation, TermValidation,
};

/// Result alias used by every strict calculator function.
pub type Result<T> = std::result::Result<T, buffr_core::LoanCalculationError>;
