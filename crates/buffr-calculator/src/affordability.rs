//! # Salary Affordability
//!
//! The "1/3 rule": a loan is affordable when the requested principal is at
//! most one third of the borrower's monthly salary.
//!
//! The rule is evaluated against the principal, not the monthly
//! installment. Debt-to-income rules are usually expressed against the
//! installment; this behaviour is kept as-is pending product sign-off.

use buffr_core::policy::AFFORDABILITY_DIVISOR;
use buffr_core::{LoanCalculationError, Money, Quantity};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Affordability verdict for one (amount, salary) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryComplianceResult {
    /// True when `loan_amount <= monthly_salary / 3`.
    pub is_compliant: bool,
    /// One third of the salary, floored to the cent.
    pub max_loan_amount: Money,
    /// Loan amount as a percentage of the salary.
    pub compliance_percentage: f64,
}

/// Check `loan_amount` against one third of `monthly_salary`.
pub fn validate_salary_compliance(
    loan_amount: Money,
    monthly_salary: Money,
) -> Result<SalaryComplianceResult> {
    if loan_amount.is_negative() {
        return Err(LoanCalculationError::NegativeValue(Quantity::LoanAmount));
    }
    if !monthly_salary.is_positive() {
        return Err(LoanCalculationError::NonPositiveValue(
            Quantity::MonthlySalary,
        ));
    }

    // Flooring keeps `amount <= max_loan_amount` equivalent to the exact test.
    let max_loan_amount = monthly_salary
        .div_floor(AFFORDABILITY_DIVISOR)
        .unwrap_or(Money::ZERO);
    let is_compliant = i128::from(loan_amount.cents()) * i128::from(AFFORDABILITY_DIVISOR)
        <= i128::from(monthly_salary.cents());
    let compliance_percentage = loan_amount.ratio_percent(monthly_salary);

    tracing::debug!(
        loan_amount = %loan_amount,
        monthly_salary = %monthly_salary,
        is_compliant,
        "salary compliance evaluated"
    );

    Ok(SalaryComplianceResult {
        is_compliant,
        max_loan_amount,
        compliance_percentage,
    })
}
