/// SKR holdings checker library
///
/// Queries a Solana RPC endpoint for a wallet's SKR token balance and an
/// estimated staked balance decoded from the SKR staking program's accounts.

pub mod config;
pub mod constants;
pub mod errors;
pub mod extraction; // Fixed-offset account data decoding
pub mod logger;
pub mod report;
pub mod rewards; // Timestamp heuristic + reward projection
pub mod rpc;
pub mod staking;
pub mod wallet;
