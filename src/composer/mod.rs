//! Request-to-instruction composer
//!
//! Translates high-level create/buy requests into fully-specified,
//! correctly-ordered instruction sets for the external launch program.
//!
//! ## Architecture
//!
//! The composer is split into focused modules:
//! - **errors**: error taxonomy with retryability and category hooks
//! - **derive**: deterministic program-derived address computation
//! - **resolver**: ordered account-list assembly, fee-vault derivation
//! - **prepare**: idempotent setup steps preceding the main call
//! - **instructions**: wire encoding against the launch program's ABI
//! - **compose**: final validation and atomic-set assembly
//!
//! Everything here is synchronous and free of I/O; derivation and
//! resolution are pure, so independent requests compose concurrently
//! without shared mutable state. Execution is delegated to the
//! [`crate::ledger::LedgerClient`] boundary.

pub mod errors;
pub use errors::ComposerError;

pub mod compose;
pub mod derive;
pub mod instructions;
pub mod prepare;
pub mod resolver;

pub use compose::{compose, validate_buy_order, AtomicInstructionSet, ValidatedBuyArgs};
pub use resolver::{
    resolve_buy, resolve_create, ResolveContext, ResolvedBuyAccounts, ResolvedCreateAccounts,
};
