//! Configuration module for the launchpad router
//!
//! Handles configuration loading from TOML files and provides structured
//! configuration types. Addresses are stored as base58 strings in the file
//! and parsed once at startup; the parsed values are read-only for the
//! lifetime of the process.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Main router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Launch program (bonding curve owner) this router composes for
    pub launch_program: String,

    /// Platform-wide parameter account, passed through opaquely
    pub platform_config: String,

    /// Default quote mint (wrapped native mint if unset)
    #[serde(default = "default_quote_mint")]
    pub quote_mint: String,

    /// Compute-unit ceiling raised ahead of a create; mint initialization
    /// is resource-heavy. 0 skips the directive.
    #[serde(default = "default_create_cu_limit")]
    pub create_compute_unit_limit: u32,

    /// Default pool creator identity, seeding the creator fee vault when
    /// a buy does not supply one
    ///
    /// Optional: resolution fails when neither this nor a per-call
    /// creator is present. This is the pool's recorded creator, not the
    /// calling wallet.
    #[serde(default)]
    pub pool_creator: Option<String>,
}

// Default value functions
fn default_quote_mint() -> String {
    spl_token::native_mint::id().to_string()
}
fn default_create_cu_limit() -> u32 {
    500_000
}

impl RouterConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn launch_program(&self) -> anyhow::Result<Pubkey> {
        parse_pubkey("launch_program", &self.launch_program)
    }

    pub fn platform_config(&self) -> anyhow::Result<Pubkey> {
        parse_pubkey("platform_config", &self.platform_config)
    }

    pub fn quote_mint(&self) -> anyhow::Result<Pubkey> {
        parse_pubkey("quote_mint", &self.quote_mint)
    }

    pub fn pool_creator(&self) -> anyhow::Result<Option<Pubkey>> {
        self.pool_creator
            .as_deref()
            .map(|value| parse_pubkey("pool_creator", value))
            .transpose()
    }
}

fn parse_pubkey(field: &str, value: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| anyhow::anyhow!("invalid {field} address {value:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let launch = Pubkey::new_unique();
        let platform = Pubkey::new_unique();
        let toml = format!("launch_program = \"{launch}\"\nplatform_config = \"{platform}\"\n");

        let config: RouterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.launch_program().unwrap(), launch);
        assert_eq!(config.platform_config().unwrap(), platform);
        assert_eq!(config.quote_mint().unwrap(), spl_token::native_mint::id());
        assert_eq!(config.create_compute_unit_limit, 500_000);
        assert_eq!(config.pool_creator().unwrap(), None);
    }

    #[test]
    fn test_parse_pool_creator_override() {
        let creator = Pubkey::new_unique();
        let toml = format!(
            "launch_program = \"{}\"\nplatform_config = \"{}\"\npool_creator = \"{creator}\"\n",
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );

        let config: RouterConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config.pool_creator().unwrap(), Some(creator));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let config = RouterConfig {
            launch_program: "not-a-pubkey".to_string(),
            platform_config: Pubkey::new_unique().to_string(),
            quote_mint: default_quote_mint(),
            create_compute_unit_limit: default_create_cu_limit(),
            pool_creator: None,
        };
        assert!(config.launch_program().is_err());
        assert!(config.platform_config().is_ok());
    }
}
