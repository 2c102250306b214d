//! # Afford Subcommand
//!
//! Checks a loan against the salary 1/3 rule. A non-compliant loan exits
//! with the domain failure code so scripts can branch on it.

use std::io::Write;

use anyhow::Result;
use buffr_calculator::validate_salary_compliance;
use buffr_core::Money;
use clap::Args;

use crate::output::{report_rejection, write_json};
use crate::{EXIT_DOMAIN, EXIT_OK};

/// Arguments for the `buffr afford` subcommand.
#[derive(Args, Debug)]
pub struct AffordArgs {
    /// Requested principal.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Money,

    /// Gross monthly salary.
    #[arg(long, allow_negative_numbers = true)]
    pub salary: Money,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the afford subcommand.
///
/// Returns exit code: 0 when compliant, 1 when not compliant or rejected.
pub fn run_afford(args: &AffordArgs, out: &mut dyn Write) -> Result<u8> {
    let result = match validate_salary_compliance(args.amount, args.salary) {
        Ok(result) => result,
        Err(err) => return report_rejection(out, args.json, &err),
    };

    if args.json {
        write_json(out, &result)?;
    } else {
        let verdict = if result.is_compliant { "yes" } else { "no" };
        writeln!(out, "Affordable:       {verdict}")?;
        writeln!(out, "Maximum loan:     {}", result.max_loan_amount)?;
        writeln!(out, "Share of salary:  {:.1}%", result.compliance_percentage)?;
    }

    Ok(if result.is_compliant { EXIT_OK } else { EXIT_DOMAIN })
}
