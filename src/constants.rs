/// Global constants used across the SKR checker
///
/// Well-known addresses and byte offsets for the SKR token and staking
/// program. The staking offsets were reverse-engineered from observed
/// mainnet accounts and are not backed by a published schema; treat them
/// as defaults for `CheckerConfig`, not as verified layout facts.

// ============================================================================
// WELL-KNOWN ADDRESSES
// ============================================================================

/// SKR token mint address
pub const SKR_TOKEN_MINT: &str = "SKRbvo6Gf7GondiT3BbTfuRDPqLWei4j2Qy2NPGZhW3";

/// SKR staking program address
pub const SKR_STAKING_PROGRAM: &str = "SKRskrmtL83pcL4YqLWt6iPefDqwXQWHSw9S9vz94BZ";

/// Global pool state account of the staking program
pub const SKR_GLOBAL_STATE: &str = "4aAEUKCcju9iAEAgdeaNz4RC7sCPv63q5g714nw4QY68";

/// Default public mainnet RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

// ============================================================================
// ACCOUNT LAYOUT OFFSETS
// ============================================================================

/// SPL token account layout: mint(32) + owner(32) + amount(8) + ...
pub const TOKEN_AMOUNT_OFFSET: usize = 64;

/// Minimum token account data length to read the amount field
pub const TOKEN_ACCOUNT_MIN_LEN: usize = 72;

/// Wallet pubkey offset inside a user stake record (primary guess)
pub const WALLET_MATCH_OFFSET: usize = 41;

/// Fallback wallet pubkey offset observed on some stake records
pub const WALLET_MATCH_OFFSET_FALLBACK: usize = 40;

/// User shares field offset inside a user stake record
pub const USER_SHARES_OFFSET: usize = 104;

/// Total shares field offset inside the global pool state
pub const GLOBAL_TOTAL_SHARES_OFFSET: usize = 1344;

/// Total staked field offset inside the global pool state
pub const GLOBAL_TOTAL_STAKED_OFFSET: usize = 3616;

// ============================================================================
// SCALES AND HEURISTICS
// ============================================================================

/// Decimal scale used for wallet token account amounts
pub const TOKEN_DECIMALS: u32 = 6;

/// Decimal scale used for staked balances (shares exchange rate)
pub const STAKE_DECIMALS: u32 = 9;

/// Lower bound for the timestamp scan heuristic (2025-01-01 00:00:00 UTC).
/// Integers below this are assumed to be unrelated fields.
pub const TIMESTAMP_SCAN_FLOOR: i64 = 1_735_689_600;

/// Upper bound slack for the timestamp scan: now + 1 day
pub const TIMESTAMP_SCAN_HORIZON_SECS: i64 = 86_400;

/// Assumed update lag when no plausible timestamp is found, in days
pub const FALLBACK_UPDATE_LAG_DAYS: f64 = 2.0;

/// Illustrative annual staking rate used for the pending-reward projection
pub const STAKING_APR: f64 = 0.08;

/// Timeout for individual RPC calls, in seconds
pub const RPC_TIMEOUT_SECS: u64 = 30;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
