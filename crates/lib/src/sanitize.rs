//! Redaction of secrets from upstream error messages
//!
//! RPC client errors echo the node URL back, and hosted Solana RPC providers
//! embed credentials in that URL. Before an error reaches a log line or an
//! HTTP response body, the following are redacted:
//! - URLs with `user:password@` credentials
//! - `api-key` / `api_key` / `token` query parameters
//! - Long hex strings

use regex::Regex;
use std::sync::LazyLock;

static URL_WITH_CREDENTIALS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z][a-z0-9+.-]*://[^:@\s]+:[^@\s]+@[^\s]+")
        .expect("Failed to create url regex pattern")
});

static API_KEY_QUERY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((?:api[-_]?key|token)=)[^&\s]+")
        .expect("Failed to create api key regex pattern")
});

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:0x)?[0-9a-fA-F]{32,}").expect("Failed to create hex regex pattern")
});

pub fn sanitize_message(message: &str) -> String {
    let result = URL_WITH_CREDENTIALS_PATTERN.replace_all(message, "[REDACTED_URL]");
    let result = API_KEY_QUERY_PATTERN.replace_all(&result, "${1}[REDACTED]");
    HEX_PATTERN.replace_all(&result, "[REDACTED_HEX]").into_owned()
}

/// Sanitizes an error message based on the `unsafe-debug` feature flag
///
/// - With `unsafe-debug`: Returns the original error message
/// - Without `unsafe-debug`: Returns a sanitized version with sensitive data redacted
#[macro_export]
macro_rules! sanitize_error {
    ($error:expr) => {{
        #[cfg(feature = "unsafe-debug")]
        {
            format!("{}", $error)
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            $crate::sanitize::sanitize_message(&format!("{}", $error))
        }
    }};
}
