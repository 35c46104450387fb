use crate::constants::*;
use crate::errors::CheckerError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Checker configuration
///
/// All addresses, byte offsets, and heuristic parameters in one explicit
/// struct passed down from the CLI layer. Defaults are the hardcoded mainnet
/// values; a JSON config file can override any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub rpc_url: String,
    pub token_mint: String,
    pub staking_program: String,
    pub global_state: String,
    #[serde(default)]
    pub offsets: StakeOffsets,
    pub token_decimals: u32,
    pub stake_decimals: u32,
    pub staking_apr: f64,
    pub fallback_lag_days: f64,
    pub timestamp_scan_floor: i64,
}

/// Byte offsets for the staking program's account layouts.
///
/// These were inferred from a handful of observed mainnet accounts and are
/// not verified against a published schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeOffsets {
    pub wallet_match: usize,
    pub wallet_match_fallback: usize,
    pub user_shares: usize,
    pub global_total_staked: usize,
    pub global_total_shares: usize,
}

impl Default for StakeOffsets {
    fn default() -> Self {
        Self {
            wallet_match: WALLET_MATCH_OFFSET,
            wallet_match_fallback: WALLET_MATCH_OFFSET_FALLBACK,
            user_shares: USER_SHARES_OFFSET,
            global_total_staked: GLOBAL_TOTAL_STAKED_OFFSET,
            global_total_shares: GLOBAL_TOTAL_SHARES_OFFSET,
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            token_mint: SKR_TOKEN_MINT.to_string(),
            staking_program: SKR_STAKING_PROGRAM.to_string(),
            global_state: SKR_GLOBAL_STATE.to_string(),
            offsets: StakeOffsets::default(),
            token_decimals: TOKEN_DECIMALS,
            stake_decimals: STAKE_DECIMALS,
            staking_apr: STAKING_APR,
            fallback_lag_days: FALLBACK_UPDATE_LAG_DAYS,
            timestamp_scan_floor: TIMESTAMP_SCAN_FLOOR,
        }
    }
}

impl CheckerConfig {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            let default_config = Self::default();
            default_config.save(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))?;

        Ok(())
    }

    pub fn mint_pubkey(&self) -> Result<Pubkey, CheckerError> {
        parse_config_pubkey(&self.token_mint, "token mint")
    }

    pub fn staking_program_pubkey(&self) -> Result<Pubkey, CheckerError> {
        parse_config_pubkey(&self.staking_program, "staking program")
    }

    pub fn global_state_pubkey(&self) -> Result<Pubkey, CheckerError> {
        parse_config_pubkey(&self.global_state, "global state account")
    }
}

fn parse_config_pubkey(value: &str, what: &str) -> Result<Pubkey, CheckerError> {
    Pubkey::from_str(value)
        .map_err(|e| CheckerError::Config(format!("invalid {} address {}: {}", what, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_mainnet_addresses() {
        let config = CheckerConfig::default();
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.token_mint, SKR_TOKEN_MINT);
        assert_eq!(config.offsets.wallet_match, 41);
        assert_eq!(config.offsets.wallet_match_fallback, 40);
        assert_eq!(config.offsets.user_shares, 104);
        assert_eq!(config.offsets.global_total_shares, 1344);
        assert_eq!(config.offsets.global_total_staked, 3616);
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = CheckerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CheckerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.token_mint, config.token_mint);
        assert_eq!(parsed.offsets.user_shares, config.offsets.user_shares);
    }
}
