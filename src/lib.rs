//! Launchpad router library
//!
//! Composes high-level create/buy requests into correctly-ordered,
//! fully-specified instruction sets for an external bonding-curve launch
//! program, then delegates atomic execution to a Ledger Client.

pub mod composer;
pub mod config;
pub mod ledger;
pub mod router;
pub mod types;

pub use composer::{AtomicInstructionSet, ComposerError};
pub use ledger::{ExecutionReceipt, LedgerClient, LedgerError};
pub use router::Router;

// Re-export commonly used types
pub use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
