use crate::common::*;
use donate_lib::constant::{DEFAULT_ACTION_PATH, DEFAULT_DESTINATION};
use serde_json::Value;
use solana_sdk::hash::Hash;

#[tokio::test]
async fn test_get_lists_presets_and_custom_amount() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let response = server.get(&format!("to={DESTINATION}&amount=2")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["title"], "Actions Example - Donate Native SOL");
    assert_eq!(json["icon"], format!("{}/avatar.svg", server.origin()));
    assert_eq!(json["label"], "Transfer");

    let actions = json["links"]["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 4);

    let base = format!("{}{DEFAULT_ACTION_PATH}?to={DESTINATION}", server.origin());
    let hrefs: Vec<&str> = actions.iter().map(|a| a["href"].as_str().unwrap()).collect();
    assert_eq!(
        hrefs,
        vec![
            format!("{base}&amount=1"),
            format!("{base}&amount=5"),
            format!("{base}&amount=10"),
            format!("{base}&amount={{amount}}"),
        ]
    );
    assert_eq!(actions[3]["parameters"][0]["name"], "amount");
    assert_eq!(actions[3]["parameters"][0]["required"], true);
}

#[tokio::test]
async fn test_get_without_query_uses_default_destination() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let json: Value = server.get("").await.unwrap().json().await.unwrap();

    let href = json["links"]["actions"][0]["href"].as_str().unwrap();
    assert!(href.contains(&format!("to={DEFAULT_DESTINATION}")), "unexpected href {href}");
}

#[tokio::test]
async fn test_get_invalid_parameters() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let response = server.get("to=not-an-address").await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Invalid input query parameter: to");

    let response = server.get(&format!("to={DESTINATION}&amount=abc")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Invalid input query parameter: amount");
}

#[tokio::test]
async fn test_options_mirrors_get() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();
    let query = format!("to={DESTINATION}");

    let get: Value = server.get(&query).await.unwrap().json().await.unwrap();
    let options = server.options(&query).await.unwrap();

    assert_eq!(options.status(), reqwest::StatusCode::OK);
    let options: Value = options.json().await.unwrap();
    assert_eq!(options, get);
}

#[tokio::test]
async fn test_actions_json_and_liveness() {
    let server = TestServer::start(donation_rpc_client(Hash::default())).await.unwrap();

    let response = server.http_client.get(server.url("/actions.json")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["rules"][0]["pathPattern"], "/api/actions/**");

    let response = server.http_client.get(server.url("/liveness")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    server.shutdown().await.unwrap();
}
