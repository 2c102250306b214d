//! # buffr-cli: Command-Line Loan Calculator
//!
//! Provides the `buffr` command-line interface over `buffr-calculator`.
//!
//! ## Subcommands
//!
//! - `buffr quote`: price a loan, optionally with its repayment schedule.
//! - `buffr afford`: check a loan against the salary 1/3 rule.
//! - `buffr validate`: run the lenient amount and term validators.
//! - `buffr policy`: print the current pricing policy.
//!
//! Every subcommand takes `--json` for machine-readable output.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                              |
//! |------|------------------------------------------------------|
//! | 0    | success                                              |
//! | 1    | input rejected, loan not affordable, or invalid field |
//! | 2    | usage or I/O error                                   |
//!
//! ```bash
//! buffr quote --amount 5000 --term 3 --first-due 2026-02-25
//! buffr afford --amount 5000 --salary 15000 --json
//! ```

pub mod afford;
pub mod output;
pub mod policy;
pub mod quote;
pub mod validate;

/// Exit code for success.
pub const EXIT_OK: u8 = 0;
/// Exit code when the calculator rejects or flags the input.
pub const EXIT_DOMAIN: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_OPERATIONAL: u8 = 2;
