use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    constant::{
        DEFAULT_ACTION_PATH, DEFAULT_AMOUNT_SOL, DEFAULT_DESCRIPTION, DEFAULT_DESTINATION,
        DEFAULT_ICON, DEFAULT_LABEL, DEFAULT_MAX_REQUEST_BODY_SIZE, DEFAULT_PRESET_AMOUNTS,
        DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_TITLE,
        SOLANA_MAINNET_BLOCKCHAIN_ID,
    },
    error::DonateError,
    sanitize_error,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub donate: DonateConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// What the action offers: where donations go and how the wallet renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DonateConfig {
    /// Destination used when the request carries no `to` parameter
    pub default_destination: String,
    /// Amount in SOL used when the request carries no `amount` parameter
    pub default_amount: Decimal,
    /// Fixed-amount buttons, in SOL
    pub preset_amounts: Vec<Decimal>,
    pub title: String,
    pub description: String,
    pub label: String,
    /// Absolute URL, or a path joined to the request origin
    pub icon: String,
}

impl Default for DonateConfig {
    fn default() -> Self {
        Self {
            default_destination: DEFAULT_DESTINATION.to_string(),
            default_amount: Decimal::from(DEFAULT_AMOUNT_SOL),
            preset_amounts: DEFAULT_PRESET_AMOUNTS.iter().map(|a| Decimal::from(*a)).collect(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            label: DEFAULT_LABEL.to_string(),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Public origin used to build absolute hrefs, e.g. `https://donate.example.com`.
    /// When unset the origin is taken from the request's Host header.
    pub base_url: Option<String>,
    pub action_path: String,
    pub blockchain_id: String,
    pub max_request_body_size: usize,
    pub request_timeout_secs: u64,
    pub rpc_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            action_path: DEFAULT_ACTION_PATH.to_string(),
            blockchain_id: SOLANA_MAINNET_BLOCKCHAIN_ID.to_string(),
            max_request_body_size: DEFAULT_MAX_REQUEST_BODY_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, DonateError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            DonateError::ConfigError(format!("Failed to read config file: {}", sanitize_error!(e)))
        })?;

        toml::from_str(&contents).map_err(|e| {
            DonateError::ConfigError(format!("Failed to parse config file: {}", sanitize_error!(e)))
        })
    }

    /// Loads `path` if it exists. A missing file is only tolerated when it is
    /// the default path, so an explicit typo still fails loudly.
    pub fn load_or_default<P: AsRef<Path>>(
        path: P,
        is_default_path: bool,
    ) -> Result<Config, DonateError> {
        let path = path.as_ref();
        if !path.exists() && is_default_path {
            log::info!("No config file at {}, using built-in defaults", path.display());
            return Ok(Config::default());
        }
        Config::load_config(path)
    }
}

impl ServerConfig {
    /// The public origin without a trailing slash, if one is configured.
    pub fn origin(&self) -> Option<&str> {
        self.base_url.as_deref().map(|url| url.trim_end_matches('/')).filter(|url| !url.is_empty())
    }
}
