/// Structured error types for the SKR checker
///
/// The taxonomy mirrors how failures are handled: invalid input is fatal at
/// the CLI layer, everything else is recovered locally and reported as a
/// zero/empty result by the component that hit it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    /// Malformed wallet address supplied on the command line. Fatal.
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    /// RPC transport or server failure. Recovered to a zero result.
    #[error("RPC request failed: {0}")]
    Rpc(String),

    /// Account data that is missing, undersized, or undecodable.
    #[error("malformed account data: {0}")]
    AccountData(String),

    /// Bad configuration value (unparseable address in the config).
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<String> for CheckerError {
    fn from(message: String) -> Self {
        CheckerError::AccountData(message)
    }
}
