//! Error types for the request-to-instruction composer
//!
//! Composer-level validation errors are returned synchronously before any
//! instruction is built or any network interaction happens. Execution-time
//! failures surface through the [`LedgerError`] passthrough variant,
//! reported verbatim from the Ledger Client and never swallowed.

use crate::ledger::LedgerError;
use thiserror::Error;

/// Error type covering the composition lifecycle
///
/// - Request validation (degenerate pairs, malformed orders)
/// - Account resolution (missing upstream values)
/// - Execution reverts reported by the Ledger Client
#[derive(Error, Debug)]
pub enum ComposerError {
    /// Base and quote mint coincide; rejected before any derivation
    #[error("degenerate token pair: base and quote mint are both {mint}")]
    DegenerateTokenPair { mint: solana_sdk::pubkey::Pubkey },

    /// A value needed for derivation (creator identity, platform config)
    /// could not be obtained
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// A buy order failed final argument validation
    #[error("invalid order: {0}")]
    InvalidOrder(String),

    /// Invalid composition input (empty main instruction, bad ordering)
    #[error("composition error: {0}")]
    Composition(String),

    /// Execution-time failure reported by the Ledger Client
    ///
    /// The whole instruction set reverted; nothing partially applied.
    /// Never retried automatically by the composer.
    #[error("execution failed: {0}")]
    Execution(#[from] LedgerError),
}

impl ComposerError {
    /// Whether retrying with fresh parameters might succeed
    ///
    /// Validation errors are deterministic and never retryable. A
    /// slippage revert may succeed with a wider bound, but the retry
    /// decision (and the new bound) belongs to the caller; the composer
    /// never alters semantics on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::DegenerateTokenPair { .. } => false,
            Self::UnresolvedReference(_) => false,
            Self::InvalidOrder(_) => false,
            Self::Composition(_) => false,
            Self::Execution(e) => e.is_retryable(),
        }
    }

    /// Error category for logging and observability
    pub fn category(&self) -> &'static str {
        match self {
            Self::DegenerateTokenPair { .. } => "validation",
            Self::UnresolvedReference(_) => "resolution",
            Self::InvalidOrder(_) => "validation",
            Self::Composition(_) => "composition",
            Self::Execution(_) => "execution",
        }
    }
}

// Convenience constructors for common error scenarios
impl ComposerError {
    pub fn unresolved(what: impl Into<String>) -> Self {
        Self::UnresolvedReference(what.into())
    }

    pub fn invalid_order(reason: impl Into<String>) -> Self {
        Self::InvalidOrder(reason.into())
    }

    pub fn composition(reason: impl Into<String>) -> Self {
        Self::Composition(reason.into())
    }
}
