//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRINTDESK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::str::FromStr;

use printdesk_core::summary::DEFAULT_ACTIVITY_LIMIT;
use printdesk_core::{ClassifierConfig, Money, NameMatching, CURRENCY_CODE, REGULAR_CUSTOMER_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Shop name (shown in headers)
    pub shop_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Orders under one name before a customer counts as a regular
    pub regular_threshold: usize,

    /// How customer names are compared when grouping orders
    pub name_matching: NameMatching,

    /// Orders on the dashboard trend chart
    pub recent_activity_limit: usize,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            shop_name: "Print Shop".to_string(),
            currency_code: CURRENCY_CODE.to_string(),
            regular_threshold: REGULAR_CUSTOMER_THRESHOLD,
            name_matching: NameMatching::default(),
            recent_activity_limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `PRINTDESK_SHOP_NAME`: shop name
    /// - `PRINTDESK_CURRENCY_CODE`: currency code for display
    /// - `PRINTDESK_REGULAR_THRESHOLD`: at least 1
    /// - `PRINTDESK_NAME_MATCHING`: `trim_lowercase`, `trim` or `exact`
    /// - `PRINTDESK_RECENT_ACTIVITY_LIMIT`: chart length
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfigState::default();

        let config = ConfigState {
            shop_name: lookup("PRINTDESK_SHOP_NAME").unwrap_or(defaults.shop_name),

            currency_code: lookup("PRINTDESK_CURRENCY_CODE").unwrap_or(defaults.currency_code),

            regular_threshold: parse_var(
                &lookup,
                "PRINTDESK_REGULAR_THRESHOLD",
                defaults.regular_threshold,
            )?,

            name_matching: match lookup("PRINTDESK_NAME_MATCHING") {
                Some(value) => parse_name_matching(&value).ok_or_else(|| {
                    ConfigError::InvalidValue("PRINTDESK_NAME_MATCHING".to_string())
                })?,
                None => defaults.name_matching,
            },

            recent_activity_limit: parse_var(
                &lookup,
                "PRINTDESK_RECENT_ACTIVITY_LIMIT",
                defaults.recent_activity_limit,
            )?,
        };

        if config.regular_threshold == 0 {
            return Err(ConfigError::InvalidValue(
                "PRINTDESK_REGULAR_THRESHOLD".to_string(),
            ));
        }

        Ok(config)
    }

    /// Classifier settings for regular-customer detection.
    pub fn classifier(&self) -> ClassifierConfig {
        ClassifierConfig {
            threshold: self.regular_threshold,
            matching: self.name_matching,
        }
    }

    /// Formats an amount in whole dinars with the configured currency code.
    ///
    /// ## Example
    /// ```rust
    /// use printdesk_backoffice::state::ConfigState;
    /// use printdesk_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_amount(Money::from_minor(123_450)), "1235 DZD");
    /// ```
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", amount.rounded_major(), self.currency_code)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

fn parse_name_matching(value: &str) -> Option<NameMatching> {
    match value.trim() {
        "trim_lowercase" => Some(NameMatching::TrimLowercase),
        "trim" => Some(NameMatching::Trim),
        "exact" => Some(NameMatching::Exact),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.classifier(), ClassifierConfig::default());
        assert_eq!(config.recent_activity_limit, 10);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("PRINTDESK_SHOP_NAME", "Atelier Sétif"),
            ("PRINTDESK_REGULAR_THRESHOLD", "5"),
            ("PRINTDESK_NAME_MATCHING", "exact"),
            ("PRINTDESK_RECENT_ACTIVITY_LIMIT", " 20 "),
        ])
        .unwrap();

        assert_eq!(config.shop_name, "Atelier Sétif");
        assert_eq!(config.classifier().threshold, 5);
        assert_eq!(config.classifier().matching, NameMatching::Exact);
        assert_eq!(config.recent_activity_limit, 20);
    }

    #[test]
    fn test_invalid_values() {
        let err = load_from(&[("PRINTDESK_REGULAR_THRESHOLD", "three")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PRINTDESK_REGULAR_THRESHOLD");

        assert!(load_from(&[("PRINTDESK_REGULAR_THRESHOLD", "0")]).is_err());
        assert!(load_from(&[("PRINTDESK_NAME_MATCHING", "fuzzy")]).is_err());
        assert!(load_from(&[("PRINTDESK_RECENT_ACTIVITY_LIMIT", "-1")]).is_err());
    }

    #[test]
    fn test_format_amount() {
        let config = ConfigState::default();
        assert_eq!(config.format_amount(Money::from_minor(100)), "1 DZD");
        assert_eq!(config.format_amount(Money::from_minor(-1234)), "-12 DZD");
        assert_eq!(config.format_amount(Money::from_minor(-1250)), "-13 DZD");
        assert_eq!(config.format_amount(Money::from_minor(49)), "0 DZD");

        let euro = ConfigState {
            currency_code: "EUR".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(euro.format_amount(Money::from_major(90)), "90 EUR");
    }
}
