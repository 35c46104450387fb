/// Wallet token balance lookup
///
/// Sums the SKR balance across all token accounts of the mint owned by the
/// wallet. RPC failures and undecodable accounts degrade to a zero/partial
/// result with a logged diagnostic; nothing here is fatal.

use crate::config::CheckerConfig;
use crate::errors::CheckerError;
use crate::extraction::{account_data_bytes, decode_token_account_amount};
use crate::logger::{debug, log, LogTag};
use crate::rpc::CheckerRpc;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Validate a wallet address for well-formedness (base58, 32 bytes).
///
/// Runs before any RPC client is constructed; a malformed address must
/// never produce a network call.
pub fn parse_wallet_address(address: &str) -> Result<Pubkey, CheckerError> {
    Pubkey::from_str(address).map_err(|_| CheckerError::InvalidAddress(address.to_string()))
}

/// One decoded token account holding the mint.
#[derive(Debug, Clone)]
pub struct TokenAccountBalance {
    pub address: String,
    pub raw_amount: u64,
    pub ui_amount: f64,
}

/// Aggregated wallet balance across all token accounts.
#[derive(Debug, Clone, Default)]
pub struct WalletBalance {
    pub accounts: Vec<TokenAccountBalance>,
    pub total: f64,
}

/// Convert a raw token amount to display units.
pub fn ui_amount(raw: u64, decimals: u32) -> f64 {
    raw as f64 / 10f64.powi(decimals as i32)
}

/// Fetch and sum the wallet's token accounts for the configured mint.
pub fn lookup_wallet_balance(
    rpc: &CheckerRpc,
    config: &CheckerConfig,
    wallet: &Pubkey,
) -> WalletBalance {
    let mint = match config.mint_pubkey() {
        Ok(mint) => mint,
        Err(e) => {
            log(LogTag::Wallet, "ERROR", &e.to_string());
            return WalletBalance::default();
        }
    };

    let keyed_accounts = match rpc.token_accounts_by_mint(wallet, &mint) {
        Ok(accounts) => accounts,
        Err(e) => {
            log(
                LogTag::Wallet,
                "ERROR",
                &format!("Token account lookup failed: {}", e),
            );
            return WalletBalance::default();
        }
    };

    debug(
        LogTag::Wallet,
        &format!("Found {} token account(s)", keyed_accounts.len()),
    );

    let mut balance = WalletBalance::default();
    for keyed in keyed_accounts {
        let data = match account_data_bytes(&keyed.account.data) {
            Ok(bytes) => bytes,
            Err(e) => {
                log(
                    LogTag::Wallet,
                    "WARN",
                    &format!("Skipping account {}: {}", keyed.pubkey, e),
                );
                continue;
            }
        };

        let raw_amount = match decode_token_account_amount(&data) {
            Ok(amount) => amount,
            Err(e) => {
                log(
                    LogTag::Wallet,
                    "WARN",
                    &format!("Skipping account {}: {}", keyed.pubkey, e),
                );
                continue;
            }
        };

        let account_ui = ui_amount(raw_amount, config.token_decimals);
        balance.total += account_ui;
        balance.accounts.push(TokenAccountBalance {
            address: keyed.pubkey,
            raw_amount,
            ui_amount: account_ui,
        });
    }

    balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_addresses_are_rejected() {
        assert!(parse_wallet_address("not-a-real-address").is_err());
        assert!(parse_wallet_address("").is_err());
        // too short for 32 bytes even though it is valid base58
        assert!(parse_wallet_address("abc").is_err());
    }

    #[test]
    fn well_formed_address_is_accepted() {
        assert!(parse_wallet_address("So11111111111111111111111111111111111111112").is_ok());
    }

    #[test]
    fn empty_wallet_reports_zero() {
        let balance = WalletBalance::default();
        assert!(balance.accounts.is_empty());
        assert_eq!(balance.total, 0.0);
    }

    #[test]
    fn ui_amount_descales_by_token_decimals() {
        assert_eq!(ui_amount(1_500_000, 6), 1.5);
        assert_eq!(ui_amount(0, 6), 0.0);
        assert_eq!(ui_amount(1_000_000_000, 9), 1.0);
    }
}
