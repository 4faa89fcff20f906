//! Error types for the storefront core
//!
//! Pricing and message formatting never fail; errors only exist at the edges:
//! - Configuration loading and validation
//! - Submitting an item configuration that is not complete

use std::path::PathBuf;

/// Main storefront error type
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Item configuration is not ready to be added to the cart
    #[error("item configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Cart, checkout or field document could not be decoded
    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),
}

impl StorefrontError {
    /// Check if the error was caused by customer input rather than setup
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("invalid value for `{key}`: {message}")]
    InvalidValue {
        /// Dotted key of the offending value
        key: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create invalid value error
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}

/// Reasons an item configuration cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Bundle items need exactly `minimum` units selected
    #[error("bundle requires exactly {required} units, {selected} selected")]
    QuantityMismatch {
        /// Units the bundle is sold as
        required: u32,
        /// Units currently selected
        selected: u32,
    },

    /// Nothing was selected
    #[error("no option selected")]
    NothingSelected,
}
