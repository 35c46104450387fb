/// Console report assembly
///
/// Runs the full holdings check for one wallet and prints the human-readable
/// report: wallet token accounts, estimated staked balance, heuristic reward
/// projection, and the combined total.

use crate::config::CheckerConfig;
use crate::logger::{log, LogTag};
use crate::rewards::{estimate_update_lag_days, project_pending_rewards};
use crate::rpc::CheckerRpc;
use crate::staking::lookup_staked_balance;
use crate::wallet::lookup_wallet_balance;
use chrono::Utc;
use colored::*;
use solana_sdk::pubkey::Pubkey;

/// Format an amount as `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    format!("{}.{}", grouped, frac_part)
}

/// Run the complete check and print the report. Chain-data anomalies never
/// fail the run; they show up as zero lines with a diagnostic above.
pub fn run_report(config: &CheckerConfig, wallet: &Pubkey) {
    log(LogTag::System, "START", "SKR holdings check");

    let rpc = CheckerRpc::new(&config.rpc_url);

    println!();
    println!("{}", "═".repeat(70).dimmed());
    println!("  {} {}", "Wallet:".dimmed(), wallet.to_string().bright_white().bold());
    println!("  {} {}", "Token mint:".dimmed(), config.token_mint);
    println!("  {} {}", "Staking program:".dimmed(), config.staking_program);
    println!("  {} {}", "RPC endpoint:".dimmed(), rpc.endpoint());
    println!("{}", "═".repeat(70).dimmed());
    println!();

    log(LogTag::Wallet, "INFO", "Querying wallet token accounts...");
    let wallet_balance = lookup_wallet_balance(&rpc, config, wallet);

    println!("{}", "Wallet balance".bold());
    for account in &wallet_balance.accounts {
        println!(
            "  - {}: {} SKR (raw: {})",
            account.address,
            format_amount(account.ui_amount).bright_white().bold(),
            account.raw_amount
        );
    }
    if wallet_balance.accounts.is_empty() {
        println!("  {}", "No token accounts for this mint".dimmed());
    }
    println!(
        "  Total in wallet: {} SKR",
        format_amount(wallet_balance.total).bright_white().bold()
    );
    println!();

    log(LogTag::Stake, "INFO", "Querying on-chain stake records...");
    let snapshot = lookup_staked_balance(&rpc, config, wallet);
    let staked = snapshot.as_ref().map(|s| s.balance).unwrap_or(0.0);

    println!("{}", "Staked balance (estimated)".bold());
    println!(
        "  Staked: {} SKR",
        format_amount(staked).bright_white().bold()
    );

    if let Some(snapshot) = &snapshot {
        let now = Utc::now().timestamp();
        let lag_days = estimate_update_lag_days(
            &snapshot.record_data,
            &snapshot.global_data,
            now,
            config.timestamp_scan_floor,
            config.fallback_lag_days,
        );
        let pending = project_pending_rewards(staked, config.staking_apr, lag_days);
        println!(
            "  Pending rewards (heuristic, ~{:.1} days at {:.1}% APR): ~{} SKR",
            lag_days,
            config.staking_apr * 100.0,
            format_amount(pending).bright_white()
        );
        println!(
            "  {}",
            "Estimate only: offsets and timestamps are reverse-engineered".dimmed()
        );
    }
    println!();

    let total = wallet_balance.total + staked;
    println!("{}", "─".repeat(70).dimmed());
    println!(
        "{} {} SKR",
        "Total (wallet + staked):".bold(),
        format_amount(total).bright_green().bold()
    );
    println!("{}", "─".repeat(70).dimmed());
    println!();

    log(LogTag::System, "FINISH", "SKR holdings check completed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped_with_commas() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(0.2), "0.20");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(100.0), "100.00");
    }
}
