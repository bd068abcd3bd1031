use crate::sanitize_error;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DonateError {
    #[error("Invalid account")]
    InvalidAccount,

    #[error("Invalid input query parameter: {0}")]
    InvalidParameter(String),

    #[error("account may not be rent exempt: {0}")]
    InsufficientAmount(String),

    #[error("RPC error: {0}")]
    UpstreamFailure(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl DonateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DonateError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ClientError> for DonateError {
    fn from(e: ClientError) -> Self {
        DonateError::UpstreamFailure(sanitize_error!(e))
    }
}

impl From<bincode::Error> for DonateError {
    fn from(e: bincode::Error) -> Self {
        DonateError::SerializationError(sanitize_error!(e))
    }
}

impl From<serde_json::Error> for DonateError {
    fn from(e: serde_json::Error) -> Self {
        DonateError::InvalidRequest(format!("malformed body: {e}"))
    }
}

// Wallets render the body verbatim, so errors go out as plain text.
impl IntoResponse for DonateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        log::warn!("Request failed with {status}: {self}");
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], self.to_string())
            .into_response()
    }
}
