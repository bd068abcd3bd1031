use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_message::Message;
use solana_sdk::{pubkey::Pubkey, transaction::Transaction};
use solana_system_interface::instruction::transfer;

use crate::{
    action::params::{parse_pubkey, DonateParams},
    constant::RENT_EXEMPT_DATA_LEN,
    error::DonateError,
};

#[derive(Debug, Default, Deserialize)]
pub struct ActionPostRequest {
    /// Payer address. Missing or non-string values become empty and fail as
    /// an invalid account rather than a body error.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub account: String,
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(account) => Ok(account),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionPostResponse {
    /// Base64 wire transaction, unsigned
    pub transaction: String,
    pub message: String,
}

pub fn parse_account(request: &ActionPostRequest) -> Result<Pubkey, DonateError> {
    parse_pubkey(&request.account).ok_or(DonateError::InvalidAccount)
}

/// Builds the unsigned transfer `payer -> params.to`.
///
/// The rent-exempt minimum and the blockhash are fetched concurrently; both
/// must succeed before anything is assembled.
pub async fn build_donation_transaction(
    rpc_client: &RpcClient,
    payer: &Pubkey,
    params: &DonateParams,
) -> Result<Transaction, DonateError> {
    let lamports = params.lamports()?;

    let (minimum_balance, (blockhash, _last_valid_block_height)) = tokio::try_join!(
        rpc_client.get_minimum_balance_for_rent_exemption(RENT_EXEMPT_DATA_LEN),
        rpc_client.get_latest_blockhash_with_commitment(CommitmentConfig::confirmed()),
    )?;

    if lamports < minimum_balance {
        log::debug!(
            "Rejecting {lamports} lamports to {}: rent-exempt minimum is {minimum_balance}",
            params.to
        );
        return Err(DonateError::InsufficientAmount(params.to.to_string()));
    }

    let instruction = transfer(payer, &params.to, lamports);
    let message = Message::new_with_blockhash(&[instruction], Some(payer), &blockhash);

    Ok(Transaction::new_unsigned(message))
}

pub fn encode_transaction(transaction: &Transaction) -> Result<String, DonateError> {
    let serialized = bincode::serialize(transaction)?;
    Ok(STANDARD.encode(serialized))
}

pub fn donation_message(params: &DonateParams) -> String {
    format!("Donate {} SOL to {}", params.amount, params.to)
}

/// POST flow: payer first (no network before it is known to be valid), then
/// the query, then the chain lookups.
pub async fn create_post_response(
    rpc_client: &RpcClient,
    request: &ActionPostRequest,
    params: Result<DonateParams, DonateError>,
) -> Result<ActionPostResponse, DonateError> {
    let payer = parse_account(request)?;
    let params = params?;

    let transaction = build_donation_transaction(rpc_client, &payer, &params).await?;

    Ok(ActionPostResponse {
        transaction: encode_transaction(&transaction)?,
        message: donation_message(&params),
    })
}
