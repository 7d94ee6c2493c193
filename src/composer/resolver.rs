//! Account resolution for buy and create requests
//!
//! Produces the complete, correctly-ordered account list the launch
//! program's entrypoints expect, deriving every address the caller cannot
//! supply. Order is a hard contract: the program indexes accounts
//! positionally, so the lists built here are never reordered, deduplicated,
//! or sorted downstream.

use crate::composer::derive;
use crate::composer::errors::ComposerError;
use crate::types::{CreateRequest, TokenPair};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, system_program, sysvar};
use tracing::debug;

/// Curve type encoded into the global config seed (constant curve)
const CURVE_TYPE_CONSTANT: u8 = 0;
/// Config index encoded into the global config seed
const GLOBAL_CONFIG_INDEX: u16 = 0;

/// Read-only surroundings a request is resolved against
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext {
    /// The launch program owning the bonding curve
    pub launch_program: Pubkey,

    /// Platform-wide parameter account, passed through opaquely
    pub platform_config: Pubkey,

    /// Fee payer and buyer wallet
    pub payer: Pubkey,

    /// The pool's recorded creator
    ///
    /// Seeds the creator fee vault. This is pool state, not an attribute
    /// of the caller; resolution fails if a buy needs it and it is absent.
    pub pool_creator: Option<Pubkey>,
}

/// Resolved account list for a buy, fixed head plus remaining-accounts tail
#[derive(Debug, Clone)]
pub struct ResolvedBuyAccounts {
    /// Fixed accounts in the entrypoint's positional order
    pub fixed: Vec<AccountMeta>,

    /// Remaining accounts, exactly `[system program, platform fee vault,
    /// creator fee vault]` in that order
    pub remaining: Vec<AccountMeta>,

    /// Buyer's base-token holding account (may not exist yet)
    pub user_base_token: Pubkey,

    /// Buyer's quote-token holding account
    pub user_quote_token: Pubkey,

    pub platform_fee_vault: Pubkey,
    pub creator_fee_vault: Pubkey,
}

impl ResolvedBuyAccounts {
    /// Full account list as the instruction carries it
    pub fn metas(&self) -> Vec<AccountMeta> {
        let mut metas = Vec::with_capacity(self.fixed.len() + self.remaining.len());
        metas.extend(self.fixed.iter().cloned());
        metas.extend(self.remaining.iter().cloned());
        metas
    }
}

/// Resolved account list for a create
#[derive(Debug, Clone)]
pub struct ResolvedCreateAccounts {
    /// Fixed accounts in the entrypoint's positional order
    pub metas: Vec<AccountMeta>,

    /// Derived pool state record the create will initialize
    pub pool_state: Pubkey,
}

fn validate_pair(pair: &TokenPair) -> Result<(), ComposerError> {
    if pair.is_degenerate() {
        return Err(ComposerError::DegenerateTokenPair {
            mint: pair.base_mint,
        });
    }
    Ok(())
}

fn validate_platform_config(platform_config: &Pubkey) -> Result<(), ComposerError> {
    if *platform_config == Pubkey::default() {
        return Err(ComposerError::unresolved("platform config address"));
    }
    Ok(())
}

/// Resolve the account list for a buy into an existing pool
///
/// Validates the pair and context before any derivation, then derives the
/// two fee vaults and emits the fixed accounts followed by the
/// remaining-accounts triple.
pub fn resolve_buy(
    pair: &TokenPair,
    ctx: &ResolveContext,
) -> Result<ResolvedBuyAccounts, ComposerError> {
    validate_pair(pair)?;
    validate_platform_config(&ctx.platform_config)?;

    let pool_creator = ctx
        .pool_creator
        .ok_or_else(|| ComposerError::unresolved("pool creator identity"))?;

    let program = &ctx.launch_program;
    let authority = derive::vault_authority(program);
    let global_config = derive::global_config(
        &pair.quote_mint,
        CURVE_TYPE_CONSTANT,
        GLOBAL_CONFIG_INDEX,
        program,
    );
    let pool_state = derive::pool_state(&pair.base_mint, &pair.quote_mint, program);
    let base_vault = derive::pool_vault(&pool_state, &pair.base_mint, program);
    let quote_vault = derive::pool_vault(&pool_state, &pair.quote_mint, program);
    let event_authority = derive::event_authority(program);

    let user_base_token =
        spl_associated_token_account::get_associated_token_address(&ctx.payer, &pair.base_mint);
    let user_quote_token =
        spl_associated_token_account::get_associated_token_address(&ctx.payer, &pair.quote_mint);

    let platform_fee_vault =
        derive::platform_fee_vault(&ctx.platform_config, &pair.quote_mint, program);
    let creator_fee_vault = derive::creator_fee_vault(&pool_creator, &pair.quote_mint, program);

    debug!(
        base_mint = %pair.base_mint,
        platform_fee_vault = %platform_fee_vault,
        creator_fee_vault = %creator_fee_vault,
        "resolved buy accounts"
    );

    let fixed = vec![
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(authority, false),
        AccountMeta::new_readonly(global_config, false),
        AccountMeta::new_readonly(ctx.platform_config, false),
        AccountMeta::new(pool_state, false),
        AccountMeta::new(user_base_token, false),
        AccountMeta::new(user_quote_token, false),
        AccountMeta::new(base_vault, false),
        AccountMeta::new(quote_vault, false),
        AccountMeta::new_readonly(pair.base_mint, false),
        AccountMeta::new_readonly(pair.quote_mint, false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(event_authority, false),
        AccountMeta::new_readonly(*program, false),
    ];

    // Positional tail the program walks by index; order is part of the
    // contract with the launch program.
    let remaining = vec![
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new(platform_fee_vault, false),
        AccountMeta::new(creator_fee_vault, false),
    ];

    Ok(ResolvedBuyAccounts {
        fixed,
        remaining,
        user_base_token,
        user_quote_token,
        platform_fee_vault,
        creator_fee_vault,
    })
}

/// Resolve the account list for a pool create
///
/// No fee-vault derivation happens at create time; the vaults come into
/// play only when trades route fees through them.
pub fn resolve_create(
    request: &CreateRequest,
    ctx: &ResolveContext,
) -> Result<ResolvedCreateAccounts, ComposerError> {
    let pair = request.token_pair();
    validate_pair(&pair)?;
    validate_platform_config(&ctx.platform_config)?;

    let program = &ctx.launch_program;
    let authority = derive::vault_authority(program);
    let global_config = derive::global_config(
        &pair.quote_mint,
        CURVE_TYPE_CONSTANT,
        GLOBAL_CONFIG_INDEX,
        program,
    );
    let pool_state = derive::pool_state(&pair.base_mint, &pair.quote_mint, program);
    let base_vault = derive::pool_vault(&pool_state, &pair.base_mint, program);
    let quote_vault = derive::pool_vault(&pool_state, &pair.quote_mint, program);
    let event_authority = derive::event_authority(program);
    let metadata_account = derive::metadata_account(&pair.base_mint);

    debug!(
        base_mint = %pair.base_mint,
        pool_state = %pool_state,
        "resolved create accounts"
    );

    let base_mint_signs = request.base_mint.requires_signature();

    let metas = vec![
        AccountMeta::new(ctx.payer, true),
        AccountMeta::new_readonly(ctx.payer, false),
        AccountMeta::new_readonly(global_config, false),
        AccountMeta::new_readonly(ctx.platform_config, false),
        AccountMeta::new_readonly(authority, false),
        AccountMeta::new(pool_state, false),
        AccountMeta::new(pair.base_mint, base_mint_signs),
        AccountMeta::new_readonly(pair.quote_mint, false),
        AccountMeta::new(base_vault, false),
        AccountMeta::new(quote_vault, false),
        AccountMeta::new(metadata_account, false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new_readonly(*derive::METADATA_PROGRAM, false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(event_authority, false),
        AccountMeta::new_readonly(*program, false),
    ];

    Ok(ResolvedCreateAccounts { metas, pool_state })
}
