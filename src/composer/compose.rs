//! Final assembly of the atomic instruction set
//!
//! Concatenates preparation steps strictly before the main instruction,
//! attaches the required signer set, and performs last-line argument
//! validation. The returned set is opaque and ready to submit; execution
//! is the Ledger Client's job.

use crate::composer::errors::ComposerError;
use crate::types::BuyOrder;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use tracing::debug;

/// Buy arguments that passed final validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedBuyArgs {
    pub amount_in: u64,
    pub minimum_amount_out: u64,
    pub share_fee_rate: u64,
}

/// Validate a buy order's arguments before the instruction is built
///
/// Rejects a zero `amount_in` and an unset slippage floor. A floor of
/// zero is legitimate (no protection) but must be the caller's explicit
/// choice. The fee share is passed through un-clamped; its range is the
/// launch program's to enforce.
pub fn validate_buy_order(order: &BuyOrder) -> Result<ValidatedBuyArgs, ComposerError> {
    if order.amount_in == 0 {
        return Err(ComposerError::invalid_order("amount_in must be non-zero"));
    }
    let minimum_amount_out = order.minimum_amount_out.ok_or_else(|| {
        ComposerError::invalid_order(
            "minimum_amount_out must be set explicitly (use 0 to disable slippage protection)",
        )
    })?;

    Ok(ValidatedBuyArgs {
        amount_in: order.amount_in,
        minimum_amount_out,
        share_fee_rate: order.share_fee_rate,
    })
}

/// A group of instructions that applies entirely or not at all
///
/// Preparation steps precede the main instruction; the signer set covers
/// every account flagged as signing across the whole set.
#[derive(Debug, Clone)]
pub struct AtomicInstructionSet {
    instructions: Vec<Instruction>,
    signers: Vec<Pubkey>,
}

impl AtomicInstructionSet {
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn signers(&self) -> &[Pubkey] {
        &self.signers
    }

    /// The main instruction is always last
    pub fn main_instruction(&self) -> &Instruction {
        // Non-empty by construction in compose()
        self.instructions.last().expect("set is never empty")
    }

    pub fn preparation_steps(&self) -> &[Instruction] {
        &self.instructions[..self.instructions.len() - 1]
    }
}

/// Assemble preparation steps and the main instruction into one atomic set
///
/// The main instruction lands last; preparation steps keep their given
/// order. Rejects a main instruction with no accounts (nothing the launch
/// program could validate positionally).
pub fn compose(
    preparation: Vec<Instruction>,
    main: Instruction,
    signers: Vec<Pubkey>,
) -> Result<AtomicInstructionSet, ComposerError> {
    if main.accounts.is_empty() {
        return Err(ComposerError::composition(
            "main instruction has no accounts",
        ));
    }
    if signers.is_empty() {
        return Err(ComposerError::composition("signer set is empty"));
    }

    let mut instructions = Vec::with_capacity(preparation.len() + 1);
    instructions.extend(preparation);
    let main_program = main.program_id;
    instructions.push(main);

    sanity_check_ix_order(&instructions, &main_program)?;

    debug!(
        total = instructions.len(),
        signers = signers.len(),
        "composed atomic instruction set"
    );

    Ok(AtomicInstructionSet {
        instructions,
        signers,
    })
}

/// Validate instruction ordering (debug/test builds only)
///
/// The main program instruction must appear exactly once, in last
/// position; preparation steps never target the main program.
#[cfg(debug_assertions)]
fn sanity_check_ix_order(
    instructions: &[Instruction],
    main_program: &Pubkey,
) -> Result<(), ComposerError> {
    let last = instructions.len() - 1;
    for (idx, ix) in instructions.iter().enumerate() {
        if idx != last && ix.program_id == *main_program {
            return Err(ComposerError::composition(format!(
                "main program instruction found at position {idx}, expected only at {last}"
            )));
        }
    }
    if instructions[last].program_id != *main_program {
        return Err(ComposerError::composition(
            "last instruction does not target the main program",
        ));
    }
    Ok(())
}

/// No-op twin for release builds
#[cfg(not(debug_assertions))]
#[inline]
fn sanity_check_ix_order(
    _instructions: &[Instruction],
    _main_program: &Pubkey,
) -> Result<(), ComposerError> {
    Ok(())
}
