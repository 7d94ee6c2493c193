//! Deterministic address derivation
//!
//! Pure functions computing the program-derived addresses the launch
//! program validates positionally: fee vaults, pool state, pool vaults,
//! vault authority, global config, event authority, and the metadata
//! record. Derivation must match the launch program's own seed convention
//! byte for byte; a drift produces an address that fails account
//! validation inside the program (`AddressMismatch` at execution time).
//!
//! No error path here: malformed seed input is a programming error, not a
//! runtime condition.

use once_cell::sync::Lazy;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Seed constants shared with the launch program
pub mod seeds {
    pub const GLOBAL_CONFIG: &[u8] = b"global_config";
    pub const POOL: &[u8] = b"pool";
    pub const POOL_VAULT: &[u8] = b"pool_vault";
    pub const VAULT_AUTH: &[u8] = b"vault_auth_seed";
    pub const EVENT_AUTHORITY: &[u8] = b"__event_authority";
    pub const METADATA: &[u8] = b"metadata";
}

/// Token metadata program owning the metadata record PDA
pub static METADATA_PROGRAM: Lazy<Pubkey> = Lazy::new(|| {
    Pubkey::from_str("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s").unwrap()
});

/// Derive a program address from an ordered seed tuple and owning program
///
/// Deterministic and order-sensitive: permuting the seeds changes the
/// result. The returned address has no associated private key.
pub fn derive(seed_tuple: &[&[u8]], owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(seed_tuple, owner).0
}

/// Platform fee vault, seeded by the platform config and quote mint
pub fn platform_fee_vault(
    platform_config: &Pubkey,
    quote_mint: &Pubkey,
    launch_program: &Pubkey,
) -> Pubkey {
    derive(
        &[platform_config.as_ref(), quote_mint.as_ref()],
        launch_program,
    )
}

/// Creator fee vault, seeded by the pool's recorded creator and quote mint
///
/// The creator is the identity recorded on the pool, not necessarily the
/// current caller.
pub fn creator_fee_vault(
    pool_creator: &Pubkey,
    quote_mint: &Pubkey,
    launch_program: &Pubkey,
) -> Pubkey {
    derive(&[pool_creator.as_ref(), quote_mint.as_ref()], launch_program)
}

/// Authority over all pool vaults
pub fn vault_authority(launch_program: &Pubkey) -> Pubkey {
    derive(&[seeds::VAULT_AUTH], launch_program)
}

/// Global config for a quote mint / curve type / config index tuple
pub fn global_config(
    quote_mint: &Pubkey,
    curve_type: u8,
    index: u16,
    launch_program: &Pubkey,
) -> Pubkey {
    let curve_type = curve_type.to_le_bytes();
    let index = index.to_le_bytes();
    derive(
        &[
            seeds::GLOBAL_CONFIG,
            quote_mint.as_ref(),
            &curve_type,
            &index,
        ],
        launch_program,
    )
}

/// Pool state record for a token pair
pub fn pool_state(base_mint: &Pubkey, quote_mint: &Pubkey, launch_program: &Pubkey) -> Pubkey {
    derive(
        &[seeds::POOL, base_mint.as_ref(), quote_mint.as_ref()],
        launch_program,
    )
}

/// Pool-owned vault holding one side of the pair
pub fn pool_vault(pool_state: &Pubkey, mint: &Pubkey, launch_program: &Pubkey) -> Pubkey {
    derive(
        &[seeds::POOL_VAULT, pool_state.as_ref(), mint.as_ref()],
        launch_program,
    )
}

/// Event authority the launch program emits through
pub fn event_authority(launch_program: &Pubkey) -> Pubkey {
    derive(&[seeds::EVENT_AUTHORITY], launch_program)
}

/// Metadata record for a base mint, owned by the metadata program
pub fn metadata_account(base_mint: &Pubkey) -> Pubkey {
    derive(
        &[
            seeds::METADATA,
            METADATA_PROGRAM.as_ref(),
            base_mint.as_ref(),
        ],
        &METADATA_PROGRAM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let platform = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        let a = platform_fee_vault(&platform, &quote, &program);
        let b = platform_fee_vault(&platform, &quote, &program);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_order_matters() {
        let x = Pubkey::new_unique();
        let y = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        let forward = derive(&[x.as_ref(), y.as_ref()], &program);
        let reversed = derive(&[y.as_ref(), x.as_ref()], &program);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_vault_kinds_diverge() {
        // Same quote mint, different seed owner: the two fee vaults must
        // never collide.
        let platform = Pubkey::new_unique();
        let creator = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        assert_ne!(
            platform_fee_vault(&platform, &quote, &program),
            creator_fee_vault(&creator, &quote, &program)
        );
    }

    #[test]
    fn test_owner_program_separates_domains() {
        let base = Pubkey::new_unique();
        let quote = Pubkey::new_unique();
        let program_a = Pubkey::new_unique();
        let program_b = Pubkey::new_unique();

        assert_ne!(
            pool_state(&base, &quote, &program_a),
            pool_state(&base, &quote, &program_b)
        );
    }

    #[test]
    fn test_global_config_index_is_part_of_the_seed() {
        let quote = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        assert_ne!(
            global_config(&quote, 0, 0, &program),
            global_config(&quote, 0, 1, &program)
        );
        assert_ne!(
            global_config(&quote, 0, 0, &program),
            global_config(&quote, 1, 0, &program)
        );
    }

    proptest! {
        #[test]
        fn prop_derive_deterministic(seed_a in prop::array::uniform32(any::<u8>()),
                                     seed_b in prop::array::uniform32(any::<u8>()),
                                     owner in prop::array::uniform32(any::<u8>())) {
            let owner = Pubkey::new_from_array(owner);
            let first = derive(&[&seed_a, &seed_b], &owner);
            let second = derive(&[&seed_a, &seed_b], &owner);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_permuted_seeds_change_address(seed_a in prop::array::uniform32(any::<u8>()),
                                              seed_b in prop::array::uniform32(any::<u8>()),
                                              owner in prop::array::uniform32(any::<u8>())) {
            prop_assume!(seed_a != seed_b);
            let owner = Pubkey::new_from_array(owner);
            prop_assert_ne!(
                derive(&[&seed_a, &seed_b], &owner),
                derive(&[&seed_b, &seed_a], &owner)
            );
        }
    }
}
