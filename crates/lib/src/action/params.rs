use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use regex::Regex;
use std::{str::FromStr, sync::LazyLock};

use crate::{
    config::DonateConfig,
    constant::{LAMPORTS_PER_SOL, MAX_SOL_DECIMALS},
    error::DonateError,
};

// Plain decimal notation only: no exponent, digit separators or special values
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(?:\.[0-9]+)?$").expect("Failed to create amount regex pattern")
});

/// Raw `?to=&amount=` query, before validation
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DonateQuery {
    pub to: Option<String>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonateParams {
    pub to: Pubkey,
    /// Amount in SOL, normalized (no trailing zeros)
    pub amount: Decimal,
}

impl DonateParams {
    /// Applies the configured defaults to absent (or empty) parameters and
    /// rejects anything present but malformed.
    pub fn from_query(query: &DonateQuery, config: &DonateConfig) -> Result<Self, DonateError> {
        let to = match non_empty(query.to.as_deref()) {
            Some(raw) => parse_pubkey(raw).ok_or_else(|| invalid_parameter("to"))?,
            None => parse_pubkey(&config.default_destination).ok_or_else(|| {
                DonateError::ConfigError(format!(
                    "default_destination is not a valid address: {}",
                    config.default_destination
                ))
            })?,
        };

        let amount = match non_empty(query.amount.as_deref()) {
            Some(raw) => parse_amount(raw)?,
            None => validate_amount(config.default_amount)?,
        };

        Ok(Self { to, amount })
    }

    pub fn lamports(&self) -> Result<u64, DonateError> {
        sol_to_lamports(self.amount)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn invalid_parameter(name: &str) -> DonateError {
    DonateError::InvalidParameter(name.to_string())
}

pub fn parse_pubkey(raw: &str) -> Option<Pubkey> {
    Pubkey::from_str(raw.trim()).ok()
}

pub fn parse_amount(raw: &str) -> Result<Decimal, DonateError> {
    let raw = raw.trim();
    if !AMOUNT_PATTERN.is_match(raw) {
        return Err(invalid_parameter("amount"));
    }
    // Exact parsing fails instead of rounding digits past the 28th decimal place
    let amount = Decimal::from_str_exact(raw).map_err(|_| invalid_parameter("amount"))?;
    validate_amount(amount)
}

/// An amount must be strictly positive and representable in whole lamports.
pub fn validate_amount(amount: Decimal) -> Result<Decimal, DonateError> {
    if amount <= Decimal::ZERO {
        return Err(invalid_parameter("amount"));
    }
    sol_to_lamports(amount)?;
    Ok(amount.normalize())
}

pub fn sol_to_lamports(amount: Decimal) -> Result<u64, DonateError> {
    if amount.normalize().scale() > MAX_SOL_DECIMALS {
        return Err(invalid_parameter("amount"));
    }
    amount
        .checked_mul(Decimal::from(LAMPORTS_PER_SOL))
        .and_then(|lamports| lamports.to_u64())
        .ok_or_else(|| invalid_parameter("amount"))
}
