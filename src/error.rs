//! Error types for sfm10-footprint-mcp.
//!
//! Configuration errors are reported by the binary before the server starts.
//! Wizard errors are returned from footprint generation and surfaced verbatim
//! to the client; they never leave partial output behind.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// A parameter value that cannot be used to build a footprint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid parameter '{parameter}': {message}")]
pub struct ValidationError {
    /// Qualified parameter name, e.g. `Pads/horizontal pads count`.
    pub parameter: String,
    /// What is wrong with the value.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for `category/name`.
    #[must_use]
    pub fn new(category: &str, name: &str, message: impl Into<String>) -> Self {
        Self {
            parameter: format!("{category}/{name}"),
            message: message.into(),
        }
    }
}

/// Errors raised while resolving parameters or building a footprint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// An override named a parameter the wizard does not declare.
    #[error("unknown parameter '{category}/{name}'")]
    UnknownParameter {
        /// Parameter category.
        category: String,
        /// Parameter name.
        name: String,
    },

    /// A parameter value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_names_parameter() {
        let error = ValidationError::new("Pads", "horizontal pads count", "must be even");
        assert_eq!(error.parameter, "Pads/horizontal pads count");
        let msg = error.to_string();
        assert!(msg.contains("Pads/horizontal pads count"));
        assert!(msg.contains("must be even"));
    }

    #[test]
    fn wizard_error_is_transparent_over_validation() {
        let inner = ValidationError::new("Body", "width", "must not be negative");
        let error = WizardError::from(inner.clone());
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn unknown_parameter_display() {
        let error = WizardError::UnknownParameter {
            category: "Pads".to_string(),
            name: "pad colour".to_string(),
        };
        assert!(error.to_string().contains("Pads/pad colour"));
    }
}
