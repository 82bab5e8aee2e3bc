//! Error types for roimap.
//!
//! The calculation engine in [`crate::roi`] never fails. Everything that can
//! go wrong lives at the edges: reading `.roimap.toml`, validating inputs,
//! parsing `--set` overrides, picking a currency and writing reports.
//!
//! # Example
//!
//! ```rust
//! use roimap::errors::RoiError;
//!
//! let err = RoiError::validation("hourly_cost must be non-negative, got -5");
//! assert!(err.is_user_fixable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roimap operations
#[derive(Debug, Error)]
pub enum RoiError {
    /// File system related errors
    #[error("File system error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Input or assumption validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed command-line override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Several problems found in one validation pass
    #[error("{} validation errors:\n{}", .0.len(), bullet_list(.0))]
    Invalid(Vec<RoiError>),

    /// Currency id not present in the locale table
    #[error("Unknown currency '{0}' (expected one of: usd, eur, krw, jpy)")]
    UnknownCurrency(String),
}

impl RoiError {
    /// Create an I/O error with path context
    pub fn io(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Errors the user can fix by editing their inputs or config.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Invalid(errors) => errors.iter().all(Self::is_user_fixable),
            Self::Io { .. } => false,
            _ => true,
        }
    }

    /// Path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

fn bullet_list(errors: &[RoiError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result alias for roimap operations
pub type Result<T> = std::result::Result<T, RoiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_with_path() {
        let err = RoiError::config_with_path("bad section", "/tmp/.roimap.toml");
        assert_eq!(err.path(), Some(&PathBuf::from("/tmp/.roimap.toml")));
        assert_eq!(err.to_string(), "Configuration error: bad section");
    }

    #[test]
    fn test_user_fixable_classification() {
        assert!(RoiError::validation("x").is_user_fixable());
        assert!(RoiError::UnknownCurrency("gbp".into()).is_user_fixable());

        let io = RoiError::io(
            "read failed",
            "/nope",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_user_fixable());
    }

    #[test]
    fn test_invalid_lists_every_error() {
        let err = RoiError::Invalid(vec![
            RoiError::validation("a"),
            RoiError::UnknownCurrency("gbp".into()),
        ]);

        assert!(err.to_string().starts_with("2 validation errors:\n  - Validation error: a"));
        assert!(err.is_user_fixable());
    }

    #[test]
    fn test_unknown_currency_message() {
        let err = RoiError::UnknownCurrency("gbp".to_string());
        assert!(err.to_string().contains("gbp"));
        assert!(err.to_string().contains("usd"));
    }
}
