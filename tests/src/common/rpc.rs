use serde_json::json;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_request::RpcRequest};
use solana_sdk::hash::Hash;
use std::{collections::HashMap, sync::Arc};

use crate::common::{FAILING_RPC_URL, MOCK_RPC_URL, RENT_EXEMPT_MINIMUM_LAMPORTS};

/// A node that answers one rent query and one blockhash query.
///
/// Mocks are consumed per request, so every server needs its own client.
pub fn donation_rpc_client(blockhash: Hash) -> Arc<RpcClient> {
    let mut mocks = HashMap::new();
    mocks.insert(
        RpcRequest::GetMinimumBalanceForRentExemption,
        json!(RENT_EXEMPT_MINIMUM_LAMPORTS),
    );
    mocks.insert(
        RpcRequest::GetLatestBlockhash,
        json!({
            "context": { "slot": 1 },
            "value": { "blockhash": blockhash.to_string(), "lastValidBlockHeight": 1000 },
        }),
    );
    Arc::new(RpcClient::new_mock_with_mocks(MOCK_RPC_URL.to_string(), mocks))
}

/// A node where every request fails
pub fn failing_rpc_client() -> Arc<RpcClient> {
    Arc::new(RpcClient::new_mock(FAILING_RPC_URL.to_string()))
}
