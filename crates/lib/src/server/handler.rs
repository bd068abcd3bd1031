use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use log::info;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

use crate::{
    action::{
        create_actions_json, create_get_response, create_post_response,
        transaction::parse_account, ActionGetResponse, ActionPostRequest, ActionPostResponse,
        ActionsJson, DonateParams, DonateQuery,
    },
    config::{Config, ServerConfig},
    constant::X_FORWARDED_PROTO,
    error::DonateError,
};

/// Shared, read-only state behind every route
#[derive(Clone)]
pub struct DonateAction {
    rpc_client: Arc<RpcClient>,
    config: Arc<Config>,
}

impl DonateAction {
    pub fn new(rpc_client: Arc<RpcClient>, config: Arc<Config>) -> Self {
        Self { rpc_client, config }
    }

    pub fn get_rpc_client(&self) -> &Arc<RpcClient> {
        &self.rpc_client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get_action(
        &self,
        query: &DonateQuery,
        origin: &str,
    ) -> Result<ActionGetResponse, DonateError> {
        info!("Get action request: {query:?}");
        let params = DonateParams::from_query(query, &self.config.donate)?;
        let response = create_get_response(&self.config, &params, origin);
        info!("Get action response: {} links for {}", response.links.actions.len(), params.to);
        Ok(response)
    }

    pub async fn post_action(
        &self,
        query: &DonateQuery,
        request: &ActionPostRequest,
    ) -> Result<ActionPostResponse, DonateError> {
        info!("Post action request: {query:?}, payer {:?}", parse_account(request).ok());
        let params = DonateParams::from_query(query, &self.config.donate);
        let result = create_post_response(&self.rpc_client, request, params).await;
        if let Ok(response) = &result {
            info!("Post action response: {}", response.message);
        }
        result
    }
}

/// Origin for absolute hrefs: configured `base_url`, else the Host header,
/// else empty (relative hrefs).
pub fn request_origin(server: &ServerConfig, headers: &HeaderMap) -> String {
    if let Some(origin) = server.origin() {
        return origin.to_string();
    }

    let Some(host) = headers.get(header::HOST).and_then(|h| h.to_str().ok()) else {
        return String::new();
    };

    let scheme = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|proto| *proto == "https" || *proto == "http")
        .unwrap_or("http");

    format!("{scheme}://{host}")
}

fn into_query(
    query: Result<Query<DonateQuery>, QueryRejection>,
) -> Result<DonateQuery, DonateError> {
    query
        .map(|Query(query)| query)
        .map_err(|e| DonateError::InvalidRequest(format!("malformed query string: {e}")))
}

/// `GET` and `OPTIONS`
pub async fn get_donate(
    State(action): State<DonateAction>,
    headers: HeaderMap,
    query: Result<Query<DonateQuery>, QueryRejection>,
) -> Result<Json<ActionGetResponse>, DonateError> {
    let query = into_query(query)?;
    let origin = request_origin(&action.config().server, &headers);
    action.get_action(&query, &origin).map(Json)
}

pub async fn post_donate(
    State(action): State<DonateAction>,
    query: Result<Query<DonateQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, DonateError> {
    let request: ActionPostRequest = serde_json::from_slice(&body)?;
    let query = into_query(query)?;
    action.post_action(&query, &request).await.map(Json)
}

pub async fn get_actions_json() -> Json<ActionsJson> {
    Json(create_actions_json())
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
