use crate::common::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use solana_sdk::{hash::Hash, pubkey::Pubkey, transaction::Transaction};
use solana_system_interface::instruction::SystemInstruction;

fn decode_transaction(encoded: &str) -> Transaction {
    let bytes = STANDARD.decode(encoded).unwrap();
    bincode::deserialize(&bytes).unwrap()
}

#[tokio::test]
async fn test_post_builds_unsigned_transfer() {
    let blockhash = Hash::new_from_array([9u8; 32]);
    let server = TestServer::start(donation_rpc_client(blockhash)).await.unwrap();
    let payer = Pubkey::new_unique();

    let response = server
        .post(&format!("to={DESTINATION}&amount=0.25"), json!({ "account": payer.to_string() }))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["message"], format!("Donate 0.25 SOL to {DESTINATION}"));

    let transaction = decode_transaction(json["transaction"].as_str().unwrap());
    assert_eq!(transaction.message.instructions.len(), 1);
    assert_eq!(transaction.message.account_keys[0], payer);
    assert_eq!(transaction.message.recent_blockhash, blockhash);
    assert!(transaction.signatures.iter().all(|s| *s == Default::default()));

    let decoded: SystemInstruction =
        bincode::deserialize(&transaction.message.instructions[0].data).unwrap();
    assert_eq!(decoded, SystemInstruction::Transfer { lamports: 250_000_000 });
}

#[tokio::test]
async fn test_post_rejects_non_positive_amounts() {
    for amount in ["0", "-1", "-0.5"] {
        let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

        let response = server
            .post(
                &format!("to={DESTINATION}&amount={amount}"),
                json!({ "account": Pubkey::new_unique().to_string() }),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST, "amount {amount}");
        assert_eq!(response.text().await.unwrap(), "Invalid input query parameter: amount");
    }
}

#[tokio::test]
async fn test_post_rejects_malformed_amounts() {
    for amount in ["1_000", "0.0000000010000000000000000000001"] {
        let server = TestServer::start(failing_rpc_client()).await.unwrap();

        let response = server
            .post(
                &format!("to={DESTINATION}&amount={amount}"),
                json!({ "account": Pubkey::new_unique().to_string() }),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST, "amount {amount}");
        assert_eq!(response.text().await.unwrap(), "Invalid input query parameter: amount");
    }
}

#[tokio::test]
async fn test_post_invalid_account_fails_before_rpc() {
    // Any RPC call against this node would surface as an RPC error instead
    let server = TestServer::start(failing_rpc_client()).await.unwrap();

    let response =
        server.post(&format!("to={DESTINATION}"), json!({ "account": "bogus" })).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Invalid account");
}

#[tokio::test]
async fn test_post_below_rent_minimum_names_destination() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let response = server
        .post(
            &format!("to={DESTINATION}&amount=0.0005"),
            json!({ "account": Pubkey::new_unique().to_string() }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        format!("account may not be rent exempt: {DESTINATION}")
    );
}

#[tokio::test]
async fn test_post_rpc_failure_is_bad_request() {
    let server = TestServer::start(failing_rpc_client()).await.unwrap();

    let response = server
        .post(&format!("to={DESTINATION}"), json!({ "account": Pubkey::new_unique().to_string() }))
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().starts_with("RPC error:"));
}

#[tokio::test]
async fn test_post_malformed_body() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let response = server
        .http_client
        .post(server.action_url(""))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().starts_with("Invalid request:"));
}

#[tokio::test]
async fn test_post_oversized_body_rejected() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();
    let account = "x".repeat(4 * 1024 * 1024);

    let response = server.post("", json!({ "account": account })).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::PAYLOAD_TOO_LARGE);
    assert_action_headers(&response);
}
