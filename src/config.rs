//! Pricing configuration loaded from the environment.
//!
//! Commission tiers are fixed constants and are deliberately absent here;
//! only presentation settings (currency code, decimal separator) vary.

use tracing::debug;

use crate::error::{AppError, Result};

const DEFAULT_CURRENCY: &str = "EUR";
const DEFAULT_DECIMAL_SEPARATOR: char = ',';

/// Presentation settings shared by the service façade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// ISO 4217 code attached to every money value in responses
    pub currency: String,
    /// Separator used when formatting cents for display
    pub decimal_separator: char,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
        }
    }
}

impl PricingConfig {
    /// Load configuration from process environment, reading `.env` first if present.
    ///
    /// * `PRICING_CURRENCY` - three-letter currency code (default `EUR`)
    /// * `PRICING_DECIMAL_SEPARATOR` - single character (default `,`)
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency = match lookup("PRICING_CURRENCY") {
            Some(raw) => parse_currency(&raw)?,
            None => DEFAULT_CURRENCY.to_string(),
        };

        let decimal_separator = match lookup("PRICING_DECIMAL_SEPARATOR") {
            Some(raw) => parse_separator(&raw)?,
            None => DEFAULT_DECIMAL_SEPARATOR,
        };

        Ok(Self {
            currency,
            decimal_separator,
        })
    }
}

fn parse_currency(raw: &str) -> Result<String> {
    let code = raw.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::Config(format!(
            "PRICING_CURRENCY must be a three-letter code, got '{}'",
            raw
        )));
    }
    Ok(code.to_ascii_uppercase())
}

fn parse_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AppError::Config(format!(
            "PRICING_DECIMAL_SEPARATOR must be a single character, got '{}'",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = PricingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.decimal_separator, ',');
    }

    #[test]
    fn test_currency_is_normalized() {
        let config =
            PricingConfig::from_lookup(lookup_from(&[("PRICING_CURRENCY", " chf ")])).unwrap();
        assert_eq!(config.currency, "CHF");
    }

    #[test]
    fn test_invalid_currency_rejected() {
        let err = PricingConfig::from_lookup(lookup_from(&[("PRICING_CURRENCY", "EURO")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("EURO"));

        assert!(PricingConfig::from_lookup(lookup_from(&[("PRICING_CURRENCY", "E1R")])).is_err());
    }

    #[test]
    fn test_separator_override() {
        let config =
            PricingConfig::from_lookup(lookup_from(&[("PRICING_DECIMAL_SEPARATOR", ".")]))
                .unwrap();
        assert_eq!(config.decimal_separator, '.');
    }

    #[test]
    fn test_invalid_separator_rejected() {
        assert!(
            PricingConfig::from_lookup(lookup_from(&[("PRICING_DECIMAL_SEPARATOR", "")])).is_err()
        );
        assert!(
            PricingConfig::from_lookup(lookup_from(&[("PRICING_DECIMAL_SEPARATOR", "..")]))
                .is_err()
        );
    }
}
