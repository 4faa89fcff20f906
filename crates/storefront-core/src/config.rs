//! Storefront configuration
//!
//! Loaded from TOML. Every section is optional and falls back to Argentine
//! peso formatting and "Forma de retiro" as the fulfillment question.
//!
//! ```toml
//! phone = "5491112345678"
//!
//! [delivery]
//! fee = 600
//!
//! [currency]
//! fraction_digits = 0
//!
//! [catalog]
//! accumulating_categories = ["Promociones"]
//! ```

use crate::error::ConfigError;
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Store phone number orders are sent to, digits only
    pub phone: String,
    /// Delivery surcharge and the checkout question that selects it
    pub delivery: DeliverySettings,
    /// Currency display
    pub currency: CurrencySettings,
    /// Catalog behavior
    pub catalog: CatalogSettings,
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With store phone
    #[inline]
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// With delivery fee
    #[inline]
    #[must_use]
    pub fn with_delivery_fee(mut self, fee: Amount) -> Self {
        self.delivery.fee = fee;
        self
    }

    /// With currency settings
    #[inline]
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencySettings) -> Self {
        self.currency = currency;
        self
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;

        tracing::debug!(path = %path.display(), "loaded storefront configuration");
        Ok(config)
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::invalid("phone", "must contain digits only"));
        }
        if self.delivery.fee < 0 {
            return Err(ConfigError::invalid("delivery.fee", "must not be negative"));
        }
        if self.delivery.field.trim().is_empty() {
            return Err(ConfigError::invalid("delivery.field", "must not be empty"));
        }
        if self
            .delivery
            .delivery_value
            .eq_ignore_ascii_case(&self.delivery.pickup_value)
        {
            return Err(ConfigError::invalid(
                "delivery.pickup_value",
                "must differ from delivery_value",
            ));
        }
        if self.currency.fraction_digits > 4 {
            return Err(ConfigError::invalid(
                "currency.fraction_digits",
                "at most 4 digits supported",
            ));
        }
        Ok(())
    }
}

/// Delivery surcharge policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliverySettings {
    /// Flat fee charged once per delivery order
    pub fee: Amount,
    /// Title of the checkout field choosing the fulfillment method
    pub field: String,
    /// Answer meaning delivery
    pub delivery_value: String,
    /// Answer meaning pickup
    pub pickup_value: String,
}

impl Default for DeliverySettings {
    fn default() -> Self {
        Self {
            fee: 600,
            field: "Forma de retiro".to_string(),
            delivery_value: "Delivery".to_string(),
            pickup_value: "Retiro en el local".to_string(),
        }
    }
}

/// Currency display conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencySettings {
    pub symbol: String,
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub fraction_digits: u8,
    /// Put a space between symbol and number
    pub symbol_spacing: bool,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            fraction_digits: 0,
            symbol_spacing: true,
        }
    }
}

/// Catalog behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Categories whose options are counted with +/- instead of picked once
    pub accumulating_categories: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            accumulating_categories: vec!["Promociones".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.delivery.fee, 600);
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            phone = "5491100000000"

            [delivery]
            fee = 900
            "#,
        )
        .unwrap();

        assert_eq!(config.phone, "5491100000000");
        assert_eq!(config.delivery.fee, 900);
        assert_eq!(config.delivery.field, "Forma de retiro");
        assert_eq!(config.currency.symbol, "$");
    }

    #[test]
    fn rejects_negative_fee() {
        let err = StorefrontConfig::from_toml_str("[delivery]\nfee = -1").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "delivery.fee", .. }));
    }

    #[test]
    fn rejects_non_digit_phone() {
        let err = StorefrontConfig::new().with_phone("+54 11").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "phone", .. }));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = StorefrontConfig::from_toml_str("[delivery]\nprice = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_ambiguous_fulfillment_values() {
        let err = StorefrontConfig::from_toml_str(
            "[delivery]\ndelivery_value = \"Retiro\"\npickup_value = \"retiro\"",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "delivery.pickup_value", .. }));
    }
}
