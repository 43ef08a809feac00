//! Configuration file loading and parsing.
//!
//! This module handles loading the configuration file from disk and parsing
//! it into validated, type-safe structures.
//!
//! # Configuration File Locations
//!
//! The configuration file is searched in the following order:
//!
//! 1. Path given on the command line (must exist)
//! 2. Default location (built-in defaults are used if it is absent):
//!    - **Linux/macOS:** `~/.sfm10-footprint-mcp/config.json`
//!    - **Windows:** `%USERPROFILE%\.sfm10-footprint-mcp\config.json`
//!
//! # Example Configuration
//!
//! ```json
//! {
//!     "parameters": { "Pads": { "hand solder margin": 0.4 } },
//!     "style": { "text_size": 1.0 },
//!     "logging": { "level": "info" }
//! }
//! ```

mod settings;

pub use settings::{Config, LoggingConfig, StyleConfig};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
///
/// - **Linux/macOS:** `~/.sfm10-footprint-mcp/`
/// - **Windows:** `%USERPROFILE%\.sfm10-footprint-mcp\`
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".sfm10-footprint-mcp"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, uses the platform-specific default location.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - Required fields are missing or invalid
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path().ok_or_else(|| ConfigError::NotFound {
            path: PathBuf::from("<default config path>"),
        })?,
    };

    if !config_path.exists() {
        return Err(ConfigError::NotFound { path: config_path });
    }

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    let config: Config = serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path.clone(),
        source: e,
    })?;

    // Validate the configuration
    config.validate()?;

    Ok(config)
}

/// Loads the configuration, falling back to defaults when no file exists at
/// the default location.
///
/// An explicit `path` must exist.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read, parsed or validated,
/// or if an explicit `path` does not exist.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    if path.is_none() && !default_config_path().is_some_and(|p| p.exists()) {
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_dir_exists() {
        assert!(default_config_dir().is_some());
    }

    #[test]
    fn default_config_path_exists() {
        let path = default_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("config.json"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_or_default(Some(Path::new("/nonexistent/sfm10/config.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
