//! Preparation steps preceding a main instruction
//!
//! Auxiliary setup that must land in the same atomic unit, ahead of the
//! main call: idempotent creation of the buyer's token holding accounts
//! before a buy, and the compute-unit ceiling before a create.
//!
//! Idempotency invariant: repeating a preparation step against an
//! already-prepared account is a safe no-op, never a failure, so the
//! composer can be invoked repeatedly against partially-completed state
//! without manual reconciliation.

use crate::types::TokenPair;
use solana_sdk::{compute_budget::ComputeBudgetInstruction, instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use tracing::debug;

/// Build the preparation steps for a buy
///
/// Emits idempotent creation of the buyer's base-token holding account,
/// which cannot exist before the first buy of a freshly launched token.
/// The instruction is a no-op when the account already exists. The quote
/// holding account (wrapped native or stable) is the buyer's funding
/// account and is expected to exist already.
pub fn buy_preparation(payer: &Pubkey, pair: &TokenPair) -> Vec<Instruction> {
    debug!(payer = %payer, base_mint = %pair.base_mint, "building buy preparation steps");
    vec![create_associated_token_account_idempotent(
        payer,
        payer,
        &pair.base_mint,
        &spl_token::id(),
    )]
}

/// Build the preparation steps for a create
///
/// Mint initialization is compute-heavy; raise the transaction's
/// compute-unit ceiling ahead of the main call. A zero limit skips the
/// directive.
pub fn create_preparation(compute_unit_limit: u32) -> Vec<Instruction> {
    if compute_unit_limit == 0 {
        return Vec::new();
    }
    vec![ComputeBudgetInstruction::set_compute_unit_limit(
        compute_unit_limit,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::compute_budget;

    #[test]
    fn test_buy_preparation_is_repeatable() {
        let payer = Pubkey::new_unique();
        let pair = TokenPair::new(Pubkey::new_unique(), Pubkey::new_unique());

        let first = buy_preparation(&payer, &pair);
        let second = buy_preparation(&payer, &pair);

        // Same step both times; executing it twice must be a no-op on
        // the second pass, which the idempotent ATA instruction guarantees.
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].program_id, spl_associated_token_account::id());
    }

    #[test]
    fn test_buy_preparation_funds_from_payer() {
        let payer = Pubkey::new_unique();
        let pair = TokenPair::new(Pubkey::new_unique(), Pubkey::new_unique());

        for ix in buy_preparation(&payer, &pair) {
            // Funding address is the first account of the ATA instruction
            assert_eq!(ix.accounts[0].pubkey, payer);
            assert!(ix.accounts[0].is_signer);
        }
    }

    #[test]
    fn test_create_preparation_sets_cu_limit() {
        let steps = create_preparation(500_000);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].program_id, compute_budget::id());
    }

    #[test]
    fn test_create_preparation_zero_limit_skips() {
        assert!(create_preparation(0).is_empty());
    }
}
