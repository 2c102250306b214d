#![deny(missing_docs)]

//! # buffr-core: Foundational Types for BuffrLend
//!
//! This crate defines the primitives every other crate in the workspace
//! depends on. It has no internal crate dependencies, only `serde` and
//! `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Money is integer cents.** [`Money`] wraps an `i64` count of cents.
//!    Floats appear only at the untyped boundary ([`Money::from_f64`]) and
//!    in derived ratios such as a compliance percentage.
//!
//! 2. **Validated newtypes.** A [`LoanTerm`] can only be built through the
//!    policy range check, so downstream code that holds one never re-checks.
//!
//! 3. **Single policy module.** Every business constant (rates, bounds,
//!    fixed fees) lives in [`policy`]. There is no per-call override.
//!
//! 4. **[`LoanCalculationError`] hierarchy.** Structured errors with
//!    `thiserror` whose display text is the user-facing message.

pub mod error;
pub mod money;
pub mod policy;
pub mod term;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{AmountViolation, LoanCalculationError, MoneyParseError, Quantity, TermViolation};
pub use money::Money;
pub use term::LoanTerm;
