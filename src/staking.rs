/// Staked balance estimation
///
/// Finds the wallet's stake records in the staking program via a memcmp
/// filter on the wallet pubkey bytes, sums the shares fields, and converts
/// shares to SKR using the pool-wide exchange rate from the global state
/// account. Every failure degrades to "no stake" with a diagnostic.

use crate::config::CheckerConfig;
use crate::errors::CheckerError;
use crate::extraction::{extract_global_totals, extract_user_shares};
use crate::logger::{debug, log, LogTag};
use crate::rpc::CheckerRpc;
use solana_sdk::{account::Account, pubkey::Pubkey};

/// Snapshot of the wallet's stake position.
///
/// The raw buffers are kept for the timestamp heuristic in `rewards`.
#[derive(Debug, Clone)]
pub struct StakeSnapshot {
    pub shares: u64,
    pub balance: f64,
    pub record_data: Vec<u8>,
    pub global_data: Vec<u8>,
}

/// Convert user shares to a descaled token balance.
///
/// Uses u128 integer arithmetic so the division is exact before descaling:
/// `balance = shares * total_staked / total_shares / 10^decimals`.
pub fn shares_to_balance(
    user_shares: u64,
    total_staked: u64,
    total_shares: u64,
    decimals: u32,
) -> f64 {
    if total_shares == 0 {
        return 0.0;
    }
    let staked_raw = (user_shares as u128) * (total_staked as u128) / (total_shares as u128);
    staked_raw as f64 / 10f64.powi(decimals as i32)
}

/// Fetch the wallet's stake records and the global pool state, returning
/// `None` when the wallet has no stake or the pool state is unreadable.
pub fn lookup_staked_balance(
    rpc: &CheckerRpc,
    config: &CheckerConfig,
    wallet: &Pubkey,
) -> Option<StakeSnapshot> {
    let program = match config.staking_program_pubkey() {
        Ok(program) => program,
        Err(e) => {
            log(LogTag::Stake, "ERROR", &e.to_string());
            return None;
        }
    };

    let records = fetch_stake_records(rpc, config, &program, wallet)?;

    let mut shares: u64 = 0;
    for (pubkey, account) in &records {
        match extract_user_shares(&account.data, config.offsets.user_shares) {
            Ok(record_shares) => {
                debug(
                    LogTag::Stake,
                    &format!("Record {}: {} shares", pubkey, record_shares),
                );
                shares = shares.saturating_add(record_shares);
            }
            Err(e) => {
                log(
                    LogTag::Stake,
                    "WARN",
                    &format!("Skipping stake record {}: {}", pubkey, e),
                );
            }
        }
    }

    let global_state = match config.global_state_pubkey() {
        Ok(address) => address,
        Err(e) => {
            log(LogTag::Stake, "ERROR", &e.to_string());
            return None;
        }
    };

    let global_data = match rpc.account_data(&global_state) {
        Ok(Some(data)) => data,
        Ok(None) => {
            log(LogTag::Stake, "WARN", "Global pool state account not found");
            return None;
        }
        Err(e) => {
            log(
                LogTag::Stake,
                "ERROR",
                &format!("Failed to read global pool state: {}", e),
            );
            return None;
        }
    };

    let (total_staked, total_shares) = match extract_global_totals(
        &global_data,
        config.offsets.global_total_staked,
        config.offsets.global_total_shares,
    ) {
        Ok(totals) => totals,
        Err(e) => {
            log(LogTag::Stake, "WARN", &CheckerError::from(e).to_string());
            return None;
        }
    };

    if total_shares == 0 {
        log(LogTag::Stake, "WARN", "Pool reports zero total shares");
    }

    debug(
        LogTag::Stake,
        &format!(
            "Pool totals: staked={} shares={} user_shares={}",
            total_staked, total_shares, shares
        ),
    );

    let balance = shares_to_balance(shares, total_staked, total_shares, config.stake_decimals);
    let record_data = records
        .into_iter()
        .next()
        .map(|(_, account)| account.data)
        .unwrap_or_default();

    Some(StakeSnapshot {
        shares,
        balance,
        record_data,
        global_data,
    })
}

/// Memcmp query at the primary offset, falling back to the secondary offset
/// observed on some wallets. Returns `None` when no record matches.
fn fetch_stake_records(
    rpc: &CheckerRpc,
    config: &CheckerConfig,
    program: &Pubkey,
    wallet: &Pubkey,
) -> Option<Vec<(Pubkey, Account)>> {
    let records = match rpc.stake_records(program, wallet, config.offsets.wallet_match) {
        Ok(records) => records,
        Err(e) => {
            log(
                LogTag::Stake,
                "ERROR",
                &format!("Stake record lookup failed: {}", e),
            );
            return None;
        }
    };
    if !records.is_empty() {
        return Some(records);
    }

    debug(
        LogTag::Stake,
        &format!(
            "No match at offset {}, trying fallback offset {}",
            config.offsets.wallet_match, config.offsets.wallet_match_fallback
        ),
    );

    let records = match rpc.stake_records(program, wallet, config.offsets.wallet_match_fallback) {
        Ok(records) => records,
        Err(e) => {
            log(
                LogTag::Stake,
                "ERROR",
                &format!("Stake record lookup failed: {}", e),
            );
            return None;
        }
    };
    if records.is_empty() {
        log(LogTag::Stake, "INFO", "No stake records for this wallet");
        return None;
    }
    Some(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_convert_exactly_through_pool_rate() {
        // rate = 1_000_000_000 / 500_000_000 = 2, user stake = 200_000_000 raw
        let balance = shares_to_balance(100_000_000, 1_000_000_000, 500_000_000, 9);
        assert_eq!(balance, 0.2);
    }

    #[test]
    fn zero_total_shares_yields_zero_balance() {
        assert_eq!(shares_to_balance(100_000_000, 1_000_000_000, 0, 9), 0.0);
    }

    #[test]
    fn zero_shares_yields_zero_balance() {
        assert_eq!(shares_to_balance(0, 1_000_000_000, 500_000_000, 9), 0.0);
    }

    #[test]
    fn large_positions_do_not_overflow() {
        let balance = shares_to_balance(u64::MAX, u64::MAX, u64::MAX, 9);
        assert!(balance > 0.0);
    }

    #[test]
    fn shares_extracted_from_fixture_record() {
        let mut data = vec![0u8; 112];
        data[104..112].copy_from_slice(&777u64.to_le_bytes());
        assert_eq!(
            crate::extraction::extract_user_shares(&data, 104).unwrap(),
            777
        );
    }
}
