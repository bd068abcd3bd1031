use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    constant::{
        ACTION_VERSION, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_EXPOSE_HEADERS,
        X_ACTION_VERSION, X_BLOCKCHAIN_IDS,
    },
    error::DonateError,
};

/// Headers every action response carries, error and preflight responses included.
///
/// These are set unconditionally rather than through `CorsLayer`, which would
/// answer preflight requests itself instead of routing `OPTIONS` to the action.
pub fn action_headers(blockchain_id: &str) -> Result<Vec<(HeaderName, HeaderValue)>, DonateError> {
    let blockchain_ids = HeaderValue::from_str(blockchain_id).map_err(|e| {
        DonateError::ConfigError(format!("Invalid blockchain_id {blockchain_id:?}: {e}"))
    })?;

    Ok(vec![
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(CORS_ALLOW_METHODS)),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(CORS_ALLOW_HEADERS)),
        (header::ACCESS_CONTROL_EXPOSE_HEADERS, HeaderValue::from_static(CORS_EXPOSE_HEADERS)),
        (HeaderName::from_static(X_ACTION_VERSION), HeaderValue::from_static(ACTION_VERSION)),
        (HeaderName::from_static(X_BLOCKCHAIN_IDS), blockchain_ids),
    ])
}

/// Wraps `router` so the action headers override whatever the inner service set.
pub fn with_action_headers(router: Router, blockchain_id: &str) -> Result<Router, DonateError> {
    Ok(action_headers(blockchain_id)?.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(name, value))
    }))
}
