use rust_decimal::Decimal;
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::{
    action::params::{parse_pubkey, sol_to_lamports},
    config::Config,
    constant::{LAMPORTS_PER_SOL, RENT_EXEMPT_DATA_LEN},
    sanitize_error,
    server::server::check_server_config,
};

pub struct ConfigValidator {}

impl ConfigValidator {
    /// Returns the warnings when the config is usable, the errors otherwise.
    ///
    /// With `skip_rpc_validation` unset the RPC node must also answer, and
    /// preset amounts below its rent-exempt minimum are reported.
    pub async fn validate_with_result(
        config: &Config,
        rpc_client: &RpcClient,
        skip_rpc_validation: bool,
    ) -> Result<Vec<String>, Vec<String>> {
        let (mut warnings, mut errors) = Self::validate_static(config);

        if !skip_rpc_validation {
            Self::validate_against_rpc(config, rpc_client, &mut warnings, &mut errors).await;
        }

        println!("=== Configuration Validation ===");
        if errors.is_empty() {
            println!("✓ Configuration validation successful!");
        } else {
            println!("✗ Configuration validation failed!");
            println!("\n❌ Errors:");
            for error in &errors {
                println!("   - {error}");
            }
            println!("\nPlease fix the configuration errors above before deploying.");
        }

        if !warnings.is_empty() {
            println!("\n⚠️  Warnings:");
            for warning in &warnings {
                println!("   - {warning}");
            }
        }

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(errors)
        }
    }

    /// Checks that need no network: `(warnings, errors)`
    pub fn validate_static(config: &Config) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let donate = &config.donate;

        if parse_pubkey(&donate.default_destination).is_none() {
            errors.push(format!(
                "Invalid default_destination: {} is not a valid address",
                donate.default_destination
            ));
        }

        if let Err(e) = Self::check_amount(donate.default_amount) {
            errors.push(format!("Invalid default_amount {}: {e}", donate.default_amount));
        }

        if donate.preset_amounts.is_empty() {
            warnings.push(
                "No preset_amounts configured - only the custom amount input will be offered"
                    .to_string(),
            );
        }
        for amount in &donate.preset_amounts {
            if let Err(e) = Self::check_amount(*amount) {
                errors.push(format!("Invalid preset amount {amount}: {e}"));
            }
        }

        if donate.title.trim().is_empty() {
            errors.push("title must not be empty".to_string());
        }
        if donate.icon.trim().is_empty() {
            errors.push("icon must not be empty".to_string());
        }
        if donate.description.trim().is_empty() {
            warnings.push("description is empty - wallets will render a blank card".to_string());
        }

        if let Err(e) = check_server_config(config) {
            errors.push(e.to_string());
        }

        match config.server.origin() {
            Some(origin) if !origin.starts_with("http://") && !origin.starts_with("https://") => {
                errors.push(format!("base_url must be an http(s) URL: {origin}"));
            }
            Some(origin) if origin.starts_with("http://") => {
                warnings.push(format!(
                    "base_url {origin} is not https - wallets will refuse to load the action"
                ));
            }
            Some(_) => {}
            None if !donate.icon.starts_with("http") => {
                warnings.push(
                    "No base_url configured - hrefs and icon are built from the Host header"
                        .to_string(),
                );
            }
            None => {}
        }

        if config.server.max_request_body_size == 0 {
            errors.push("max_request_body_size is 0 - every POST would be rejected".to_string());
        }
        if config.server.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0".to_string());
        }
        if config.server.rpc_timeout_secs == 0 {
            errors.push("rpc_timeout_secs must be greater than 0".to_string());
        }

        (warnings, errors)
    }

    fn check_amount(amount: Decimal) -> Result<u64, String> {
        if amount <= Decimal::ZERO {
            return Err("must be greater than 0".to_string());
        }
        sol_to_lamports(amount).map_err(|_| {
            "must have at most 9 decimal places and fit in a u64 lamport count".to_string()
        })
    }

    async fn validate_against_rpc(
        config: &Config,
        rpc_client: &RpcClient,
        warnings: &mut Vec<String>,
        errors: &mut Vec<String>,
    ) {
        let minimum_balance =
            match rpc_client.get_minimum_balance_for_rent_exemption(RENT_EXEMPT_DATA_LEN).await {
                Ok(lamports) => lamports,
                Err(e) => {
                    errors.push(format!("Failed to reach RPC node: {}", sanitize_error!(e)));
                    return;
                }
            };

        let minimum_sol = Decimal::from(minimum_balance) / Decimal::from(LAMPORTS_PER_SOL);
        let donate = &config.donate;
        for amount in donate.preset_amounts.iter().chain(std::iter::once(&donate.default_amount)) {
            if let Ok(lamports) = sol_to_lamports(*amount) {
                if lamports < minimum_balance {
                    warnings.push(format!(
                        "Amount {amount} SOL is below the rent-exempt minimum of {} SOL - \
                        donations of it to an empty account will be rejected",
                        minimum_sol.normalize()
                    ));
                }
            }
        }
    }
}
