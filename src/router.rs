//! Top-level router façade
//!
//! Ties configuration, the composer pipeline, and the Ledger Client
//! together: resolve accounts, build preparation steps, encode the main
//! instruction, compose, submit. Composition errors return synchronously
//! before any network interaction; execution errors pass through verbatim.

use crate::composer::{
    compose, instructions, prepare, resolve_buy, resolve_create, validate_buy_order,
    AtomicInstructionSet, ComposerError, ResolveContext,
};
use crate::config::RouterConfig;
use crate::ledger::{ExecutionReceipt, LedgerClient};
use crate::types::{BuyOrder, CreateRequest, TokenPair};
use solana_sdk::pubkey::Pubkey;
use tracing::info;

/// Composes and submits create/buy requests against one launch program
///
/// Configuration is read-only after construction; independent requests
/// may be composed concurrently.
pub struct Router<L> {
    launch_program: Pubkey,
    platform_config: Pubkey,
    quote_mint: Pubkey,
    create_compute_unit_limit: u32,
    default_pool_creator: Option<Pubkey>,
    ledger: L,
}

impl<L> Router<L> {
    pub fn new(config: &RouterConfig, ledger: L) -> anyhow::Result<Self> {
        Ok(Self {
            launch_program: config.launch_program()?,
            platform_config: config.platform_config()?,
            quote_mint: config.quote_mint()?,
            create_compute_unit_limit: config.create_compute_unit_limit,
            default_pool_creator: config.pool_creator()?,
            ledger,
        })
    }

    pub fn from_parts(
        launch_program: Pubkey,
        platform_config: Pubkey,
        create_compute_unit_limit: u32,
        ledger: L,
    ) -> Self {
        Self {
            launch_program,
            platform_config,
            quote_mint: spl_token::native_mint::id(),
            create_compute_unit_limit,
            default_pool_creator: None,
            ledger,
        }
    }

    /// Configure a default pool creator for buys that do not supply one
    pub fn with_default_pool_creator(mut self, creator: Pubkey) -> Self {
        self.default_pool_creator = Some(creator);
        self
    }

    pub fn launch_program(&self) -> Pubkey {
        self.launch_program
    }

    /// The ledger client executions are delegated to
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Pair a base mint with the configured default quote mint
    pub fn token_pair(&self, base_mint: Pubkey) -> TokenPair {
        TokenPair::new(base_mint, self.quote_mint)
    }

    fn context(&self, payer: &Pubkey, pool_creator: Option<Pubkey>) -> ResolveContext {
        ResolveContext {
            launch_program: self.launch_program,
            platform_config: self.platform_config,
            payer: *payer,
            pool_creator,
        }
    }

    /// Compose a buy without submitting it
    ///
    /// Validates the order, resolves the full account list, prefixes the
    /// idempotent holding-account preparation, and assembles the set.
    /// A per-call `pool_creator` wins over the configured default; the
    /// resolver rejects the request when neither is present.
    pub fn compose_buy(
        &self,
        payer: &Pubkey,
        pair: &TokenPair,
        pool_creator: Option<&Pubkey>,
        order: &BuyOrder,
    ) -> Result<AtomicInstructionSet, ComposerError> {
        let args = validate_buy_order(order)?;
        let creator = pool_creator.copied().or(self.default_pool_creator);
        let ctx = self.context(payer, creator);
        let resolved = resolve_buy(pair, &ctx)?;

        let preparation = prepare::buy_preparation(payer, pair);
        let main = instructions::buy_exact_in(
            &self.launch_program,
            &resolved,
            args.amount_in,
            args.minimum_amount_out,
            args.share_fee_rate,
        );

        compose(preparation, main, vec![*payer])
    }

    /// Compose a create without submitting it
    ///
    /// A fresh base mint joins the signer set so its initialization can
    /// happen inside the same atomic unit.
    pub fn compose_create(
        &self,
        payer: &Pubkey,
        request: &CreateRequest,
    ) -> Result<AtomicInstructionSet, ComposerError> {
        let ctx = self.context(payer, None);
        let resolved = resolve_create(request, &ctx)?;

        let preparation = prepare::create_preparation(self.create_compute_unit_limit);
        let main = instructions::initialize(&self.launch_program, &resolved, &request.params);

        let mut signers = vec![*payer];
        if request.base_mint.requires_signature() {
            signers.push(request.base_mint.mint());
        }

        compose(preparation, main, signers)
    }
}

impl<L: LedgerClient> Router<L> {
    /// Compose and atomically execute a buy
    pub async fn buy(
        &self,
        payer: &Pubkey,
        pair: &TokenPair,
        pool_creator: Option<&Pubkey>,
        order: &BuyOrder,
    ) -> Result<ExecutionReceipt, ComposerError> {
        let set = self.compose_buy(payer, pair, pool_creator, order)?;
        info!(
            base_mint = %pair.base_mint,
            amount_in = order.amount_in,
            instructions = set.instructions().len(),
            "submitting buy"
        );
        let receipt = self.ledger.execute_atomic(&set).await?;
        Ok(receipt)
    }

    /// Compose and atomically execute a pool create
    pub async fn create(
        &self,
        payer: &Pubkey,
        request: &CreateRequest,
    ) -> Result<ExecutionReceipt, ComposerError> {
        let set = self.compose_create(payer, request)?;
        info!(
            base_mint = %request.base_mint.mint(),
            instructions = set.instructions().len(),
            "submitting create"
        );
        let receipt = self.ledger.execute_atomic(&set).await?;
        Ok(receipt)
    }
}
