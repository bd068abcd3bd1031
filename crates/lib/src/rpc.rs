use std::{sync::Arc, time::Duration};

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;

pub fn get_rpc_client(rpc_url: &str, timeout_secs: u64) -> Arc<RpcClient> {
    log::debug!("Creating RPC client with {timeout_secs}s timeout");
    Arc::new(RpcClient::new_with_timeout_and_commitment(
        rpc_url.to_string(),
        Duration::from_secs(timeout_secs),
        CommitmentConfig::confirmed(),
    ))
}
