//! Request-scoped value objects shared across the router
//!
//! Everything here is constructed fresh per call and discarded once the
//! instruction set is composed. Accounts are plain value identifiers
//! (`Pubkey`), never live object references.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// The asset being launched and the asset used to buy it
///
/// Quote is typically the wrapped native mint or a stable mint; base is
/// newly minted or already created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Mint of the token being launched / bought
    pub base_mint: Pubkey,

    /// Mint paid in (e.g. wrapped SOL)
    pub quote_mint: Pubkey,
}

impl TokenPair {
    pub fn new(base_mint: Pubkey, quote_mint: Pubkey) -> Self {
        Self {
            base_mint,
            quote_mint,
        }
    }

    /// A pair whose base and quote coincide can never be traded
    pub fn is_degenerate(&self) -> bool {
        self.base_mint == self.quote_mint
    }
}

/// Arguments for a buy into an existing bonding curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyOrder {
    /// Quote amount spent, must be non-zero
    pub amount_in: u64,

    /// Slippage floor on the base amount received
    ///
    /// Must be chosen explicitly by the caller: `Some(0)` disables
    /// protection, `None` is rejected at composition time. The composer
    /// passes the bound through unmodified and never relaxes it.
    pub minimum_amount_out: Option<u64>,

    /// Fee share forwarded to the launch program's fee schedule
    ///
    /// Range enforcement belongs to the launch program; the composer
    /// never clamps this value.
    pub share_fee_rate: u64,
}

/// Where the base mint for a create comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseMintSource {
    /// Mint account already exists on chain
    Existing(Pubkey),

    /// Fresh keypair-backed mint; the holder of the keypair must sign so
    /// the launch program can initialize it in the same atomic unit
    Fresh(Pubkey),
}

impl BaseMintSource {
    pub fn mint(&self) -> Pubkey {
        match self {
            Self::Existing(mint) | Self::Fresh(mint) => *mint,
        }
    }

    /// Fresh mints must co-sign the create transaction
    pub fn requires_signature(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

/// Constant-curve shape registered with the launch program at create time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantCurveParams {
    pub supply: u64,
    pub total_base_sell: u64,
    pub total_quote_fund_raising: u64,
    pub migrate_type: u8,
}

/// Vesting schedule for the creator's locked allocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingParams {
    pub total_locked_amount: u64,
    pub cliff_period: u64,
    pub unlock_period: u64,
}

/// Which side of the pair trading fees are denominated in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeDenomination {
    #[default]
    QuoteToken,
    BothTokens,
}

impl FeeDenomination {
    /// Wire tag understood by the launch program
    pub fn tag(&self) -> u8 {
        match self {
            Self::QuoteToken => 0,
            Self::BothTokens => 1,
        }
    }
}

/// Token metadata and curve shape for a new launch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub curve: ConstantCurveParams,
    pub vesting: VestingParams,
    pub fee_on: FeeDenomination,
}

/// A request to create a new bonding-curve pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Base mint, existing or fresh
    pub base_mint: BaseMintSource,

    /// Quote mint the curve raises funds in
    pub quote_mint: Pubkey,

    /// Launch parameters forwarded to the program verbatim
    pub params: LaunchParams,
}

impl CreateRequest {
    pub fn token_pair(&self) -> TokenPair {
        TokenPair::new(self.base_mint.mint(), self.quote_mint)
    }
}
