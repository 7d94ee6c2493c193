//! Wire encoding for the launch program's entrypoints
//!
//! The launch program is Anchor-shaped: an 8-byte method discriminator
//! (`sha256("global:<name>")[..8]`) followed by little-endian scalar
//! arguments and length-prefixed strings. Instructions are assembled as
//! raw bytes against the resolved account lists; the program's internal
//! pricing logic stays a black box.

use crate::composer::resolver::{ResolvedBuyAccounts, ResolvedCreateAccounts};
use crate::types::LaunchParams;
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

/// Method name of the buy entrypoint
pub const BUY_METHOD: &str = "buy_exact_in";
/// Method name of the create entrypoint
pub const CREATE_METHOD: &str = "initialize_v2";

static BUY_DISCRIMINATOR: Lazy<[u8; 8]> = Lazy::new(|| anchor_discriminator(BUY_METHOD));
static CREATE_DISCRIMINATOR: Lazy<[u8; 8]> = Lazy::new(|| anchor_discriminator(CREATE_METHOD));

/// Anchor global method discriminator for an entrypoint name
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(b"global:");
    hasher.update(method.as_bytes());
    let digest = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

/// Length-prefixed string encoding (u32 LE length, then bytes)
fn put_str(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

/// Build the buy instruction with validated arguments
///
/// `minimum_amount_out` arrives here already unwrapped; validation that
/// the caller chose it explicitly happens in the composer.
pub fn buy_exact_in(
    launch_program: &Pubkey,
    accounts: &ResolvedBuyAccounts,
    amount_in: u64,
    minimum_amount_out: u64,
    share_fee_rate: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8 * 3);
    data.extend_from_slice(&*BUY_DISCRIMINATOR);
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&minimum_amount_out.to_le_bytes());
    data.extend_from_slice(&share_fee_rate.to_le_bytes());

    Instruction::new_with_bytes(*launch_program, &data, accounts.metas())
}

/// Build the pool-create instruction
pub fn initialize(
    launch_program: &Pubkey,
    accounts: &ResolvedCreateAccounts,
    params: &LaunchParams,
) -> Instruction {
    let mut data = Vec::with_capacity(128);
    data.extend_from_slice(&*CREATE_DISCRIMINATOR);

    // MintParams
    put_str(&mut data, &params.name);
    put_str(&mut data, &params.symbol);
    put_str(&mut data, &params.uri);
    data.push(params.decimals);

    // CurveParams, constant-curve variant
    data.push(0u8);
    data.extend_from_slice(&params.curve.supply.to_le_bytes());
    data.extend_from_slice(&params.curve.total_base_sell.to_le_bytes());
    data.extend_from_slice(&params.curve.total_quote_fund_raising.to_le_bytes());
    data.push(params.curve.migrate_type);

    // VestingParams
    data.extend_from_slice(&params.vesting.total_locked_amount.to_le_bytes());
    data.extend_from_slice(&params.vesting.cliff_period.to_le_bytes());
    data.extend_from_slice(&params.vesting.unlock_period.to_le_bytes());

    // Fee denomination
    data.push(params.fee_on.tag());

    Instruction::new_with_bytes(*launch_program, &data, accounts.metas.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::resolver::{resolve_buy, ResolveContext};
    use crate::types::TokenPair;

    fn resolved() -> (ResolvedBuyAccounts, Pubkey) {
        let ctx = ResolveContext {
            launch_program: Pubkey::new_unique(),
            platform_config: Pubkey::new_unique(),
            payer: Pubkey::new_unique(),
            pool_creator: Some(Pubkey::new_unique()),
        };
        let pair = TokenPair::new(Pubkey::new_unique(), Pubkey::new_unique());
        (resolve_buy(&pair, &ctx).unwrap(), ctx.launch_program)
    }

    #[test]
    fn test_discriminator_is_stable() {
        assert_eq!(anchor_discriminator(BUY_METHOD), *BUY_DISCRIMINATOR);
        assert_ne!(*BUY_DISCRIMINATOR, *CREATE_DISCRIMINATOR);
    }

    #[test]
    fn test_buy_data_layout() {
        let (accounts, program) = resolved();
        let ix = buy_exact_in(&program, &accounts, 100_000_000, 42, 7);

        assert_eq!(ix.program_id, program);
        assert_eq!(ix.data.len(), 8 + 24);
        assert_eq!(&ix.data[..8], &*BUY_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &100_000_000u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &42u64.to_le_bytes());
        assert_eq!(&ix.data[24..32], &7u64.to_le_bytes());
    }

    #[test]
    fn test_buy_carries_remaining_accounts_tail() {
        let (accounts, program) = resolved();
        let ix = buy_exact_in(&program, &accounts, 1, 0, 0);

        let tail = &ix.accounts[ix.accounts.len() - 3..];
        assert_eq!(tail[0].pubkey, solana_sdk::system_program::id());
        assert_eq!(tail[1].pubkey, accounts.platform_fee_vault);
        assert_eq!(tail[2].pubkey, accounts.creator_fee_vault);
    }

    #[test]
    fn test_string_encoding_is_length_prefixed() {
        let mut buf = Vec::new();
        put_str(&mut buf, "GLAM");
        assert_eq!(&buf[..4], &4u32.to_le_bytes());
        assert_eq!(&buf[4..], b"GLAM");
    }
}
