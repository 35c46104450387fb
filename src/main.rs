/// SKR Holdings Checker
///
/// Reports a wallet's SKR token balance plus an estimated staked balance
/// decoded from the SKR staking program's on-chain accounts.
///
/// Usage: skrcheck <WALLET_ADDRESS> [--rpc <URL>] [--config <PATH>] [--debug]

use clap::{Arg, Command};
use skrcheck::config::CheckerConfig;
use skrcheck::logger::{self, log, LogTag};
use skrcheck::report::run_report;
use skrcheck::wallet::parse_wallet_address;
use std::process;

fn main() {
    let command = Command::new("skrcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check a wallet's SKR holdings: token accounts plus estimated staked balance")
        .arg(
            Arg::new("wallet")
                .value_name("WALLET_ADDRESS")
                .help("Solana wallet address to check")
                .required(true),
        )
        .arg(
            Arg::new("rpc")
                .short('r')
                .long("rpc")
                .value_name("RPC_URL")
                .help("Custom RPC endpoint (defaults to public mainnet)")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("JSON config file with addresses and layout offsets")
                .required(false),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug output")
                .action(clap::ArgAction::SetTrue),
        );

    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version are not usage errors
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                let _ = e.print();
                process::exit(0);
            }
            let _ = e.print();
            process::exit(1);
        }
    };

    logger::set_debug(matches.get_flag("debug"));

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match CheckerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log(LogTag::System, "ERROR", &format!("Failed to load config: {}", e));
                process::exit(1);
            }
        },
        None => CheckerConfig::default(),
    };

    if let Some(rpc_url) = matches.get_one::<String>("rpc") {
        config.rpc_url = rpc_url.clone();
    }

    // Validate the address before anything touches the network
    let wallet_address = matches.get_one::<String>("wallet").cloned().unwrap_or_default();
    let wallet = match parse_wallet_address(&wallet_address) {
        Ok(wallet) => wallet,
        Err(_) => {
            log(
                LogTag::System,
                "ERROR",
                &format!("Invalid Solana wallet address: {}", wallet_address),
            );
            process::exit(1);
        }
    };

    run_report(&config, &wallet);
}
