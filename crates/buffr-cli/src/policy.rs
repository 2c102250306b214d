//! # Policy Subcommand
//!
//! Prints the pricing policy every quote uses.

use std::io::Write;

use anyhow::Result;
use buffr_core::policy::*;
use buffr_core::{LoanTerm, Money};
use clap::Args;
use serde::Serialize;

use crate::output::write_json;
use crate::EXIT_OK;

/// Arguments for the `buffr policy` subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PolicyOutput {
    interest_rate: i64,
    namfisa_levy_rate: i64,
    stamp_duty: Money,
    processing_fee_rate: i64,
    min_processing_fee: Money,
    max_processing_fee: Money,
    min_loan_amount: Money,
    max_loan_amount: Money,
    min_loan_term: u32,
    max_loan_term: u32,
    affordability_divisor: u32,
    currency: &'static str,
}

/// Execute the policy subcommand.
pub fn run_policy(args: &PolicyArgs, out: &mut dyn Write) -> Result<u8> {
    if args.json {
        write_json(
            out,
            &PolicyOutput {
                interest_rate: INTEREST_RATE,
                namfisa_levy_rate: NAMFISA_LEVY_RATE,
                stamp_duty: STAMP_DUTY,
                processing_fee_rate: PROCESSING_FEE_RATE,
                min_processing_fee: MIN_PROCESSING_FEE,
                max_processing_fee: MAX_PROCESSING_FEE,
                min_loan_amount: MIN_LOAN_AMOUNT,
                max_loan_amount: MAX_LOAN_AMOUNT,
                min_loan_term: MIN_LOAN_TERM,
                max_loan_term: MAX_LOAN_TERM,
                affordability_divisor: AFFORDABILITY_DIVISOR,
                currency: CURRENCY_CODE,
            },
        )?;
        return Ok(EXIT_OK);
    }

    let terms: Vec<String> = LoanTerm::all().map(|t| t.to_string()).collect();
    writeln!(out, "Interest:         {INTEREST_RATE}% of principal")?;
    writeln!(
        out,
        "Processing fee:   {PROCESSING_FEE_RATE}% (min {MIN_PROCESSING_FEE}, max {MAX_PROCESSING_FEE})"
    )?;
    writeln!(out, "NAMFISA levy:     {NAMFISA_LEVY_RATE}% of principal")?;
    writeln!(out, "Stamp duty:       {STAMP_DUTY}")?;
    writeln!(out, "Loan amount:      {MIN_LOAN_AMOUNT} to {MAX_LOAN_AMOUNT}")?;
    writeln!(out, "Terms:            {}", terms.join(", "))?;
    writeln!(
        out,
        "Affordability:    at most 1/{AFFORDABILITY_DIVISOR} of monthly salary"
    )?;
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_policy() {
        let mut out = Vec::new();
        run_policy(&PolicyArgs { json: false }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Interest:         15% of principal"));
        assert!(text.contains("(min N$20, max N$100)"));
        assert!(text.contains("N$500 to N$10,000"));
        assert!(text.contains("1 month, 2 months, 3 months, 4 months, 5 months"));
    }

    #[test]
    fn json_policy() {
        let mut out = Vec::new();
        run_policy(&PolicyArgs { json: true }, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["interest_rate"], 15);
        assert_eq!(value["stamp_duty"], "15.00");
        assert_eq!(value["currency"], "NAD");
    }
}
