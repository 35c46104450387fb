/// Thin synchronous RPC access layer
///
/// Wraps the blocking `solana_client` RPC client with the three queries the
/// checker needs. Every method returns a `Result`; the degrade-to-zero
/// behavior on failure lives in the calling component, not here.

use crate::constants::RPC_TIMEOUT_SECS;
use crate::errors::CheckerError;
use crate::logger::{debug, LogTag};
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig},
    rpc_filter::{Memcmp, RpcFilterType},
    rpc_request::RpcRequest,
    rpc_response::{Response, RpcKeyedAccount},
};
use solana_sdk::{account::Account, commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::time::Duration;

pub struct CheckerRpc {
    client: RpcClient,
    endpoint: String,
}

impl CheckerRpc {
    pub fn new(rpc_url: &str) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            rpc_url.to_string(),
            Duration::from_secs(RPC_TIMEOUT_SECS),
            CommitmentConfig::confirmed(),
        );
        Self {
            client,
            endpoint: rpc_url.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// All token accounts of `mint` owned by `owner`, with base64-encoded
    /// account data so the raw buffer can be decoded at fixed offsets.
    pub fn token_accounts_by_mint(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Vec<RpcKeyedAccount>, CheckerError> {
        debug(
            LogTag::Rpc,
            &format!("getTokenAccountsByOwner owner={} mint={}", owner, mint),
        );
        let params = serde_json::json!([
            owner.to_string(),
            { "mint": mint.to_string() },
            { "encoding": "base64" }
        ]);
        let response: Response<Vec<RpcKeyedAccount>> = self
            .client
            .send(RpcRequest::GetTokenAccountsByOwner, params)
            .map_err(|e| CheckerError::Rpc(e.to_string()))?;
        Ok(response.value)
    }

    /// Program accounts whose data matches `wallet` bytes at `offset`.
    pub fn stake_records(
        &self,
        program: &Pubkey,
        wallet: &Pubkey,
        offset: usize,
    ) -> Result<Vec<(Pubkey, Account)>, CheckerError> {
        debug(
            LogTag::Rpc,
            &format!(
                "getProgramAccounts program={} memcmp offset={}",
                program, offset
            ),
        );
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                offset,
                &wallet.to_bytes(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        self.client
            .get_program_accounts_with_config(program, config)
            .map_err(|e| CheckerError::Rpc(e.to_string()))
    }

    /// Raw data of a single account, `None` if the account does not exist.
    pub fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, CheckerError> {
        debug(LogTag::Rpc, &format!("getAccountInfo {}", address));
        let response = self
            .client
            .get_account_with_commitment(address, CommitmentConfig::confirmed())
            .map_err(|e| CheckerError::Rpc(e.to_string()))?;
        Ok(response.value.map(|account| account.data))
    }
}
