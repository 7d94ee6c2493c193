//! Ledger Client boundary
//!
//! The composer hands a finished [`AtomicInstructionSet`] to a Ledger
//! Client, which signs, submits, and confirms it as a single atomic
//! transaction: every instruction applies or none do. Transport, retry
//! policy, and wallet management all live behind this trait; the composer
//! reports execution failures verbatim and never retries with altered
//! semantics.

use crate::composer::AtomicInstructionSet;
use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Execution-time failures reported by the ledger
///
/// These surface after composition, from inside the launch program or the
/// runtime. The whole instruction set has already reverted when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Realized output fell below the caller's slippage floor
    #[error("slippage exceeded: realized output {amount_out} below floor {minimum_amount_out}")]
    SlippageExceeded {
        amount_out: u64,
        minimum_amount_out: u64,
    },

    /// A derived address does not match the program's own record
    ///
    /// Indicates derivation-scheme drift between this composer and the
    /// launch program. Fatal; never retried automatically.
    #[error("address mismatch for {account}: derived {derived} rejected by program")]
    AddressMismatch { account: String, derived: Pubkey },

    /// An instruction in the set failed, reverting the entire set
    #[error("instruction {index} failed, set reverted: {reason}")]
    AtomicExecutionFailure { index: usize, reason: String },
}

impl LedgerError {
    /// Whether a caller-initiated retry with fresh parameters can succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            // A wider slippage bound chosen by the caller may go through
            Self::SlippageExceeded { .. } => true,
            // Derivation drift is a bug, not a transient condition
            Self::AddressMismatch { .. } => false,
            Self::AtomicExecutionFailure { .. } => false,
        }
    }
}

/// Outcome of a successfully executed instruction set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReceipt {
    /// Number of instructions applied (always the whole set)
    pub instructions_applied: usize,

    /// Base amount credited by a buy, when the main instruction was one
    pub amount_out: Option<u64>,
}

/// Atomic executor for composed instruction sets
///
/// Implementations sign with the attached signer set and submit the
/// instructions as one transaction.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    async fn execute_atomic(
        &self,
        set: &AtomicInstructionSet,
    ) -> Result<ExecutionReceipt, LedgerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slippage_is_caller_retryable() {
        let err = LedgerError::SlippageExceeded {
            amount_out: 99,
            minimum_amount_out: 100,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_address_mismatch_is_fatal() {
        let err = LedgerError::AddressMismatch {
            account: "creator fee vault".to_string(),
            derived: Pubkey::new_unique(),
        };
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("creator fee vault"));
    }
}
