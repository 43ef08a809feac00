//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::draw::LineWidths;
use crate::error::ConfigError;
use crate::wizard::{ParameterStore, ParameterValues, Sfm10Params, DEFAULT_TEXT_SIZE};

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Overrides of the wizard's parameter defaults, by category and name.
    #[serde(default)]
    pub parameters: ParameterValues,

    /// Drawing style settings.
    #[serde(default)]
    pub style: StyleConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let style = [
            ("style.text_size", self.style.text_size),
            ("style.silkscreen_line_width", self.style.silkscreen_line_width),
            ("style.courtyard_line_width", self.style.courtyard_line_width),
        ];
        for (name, value) in style {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }

        self.parameter_store()?;
        Ok(())
    }

    /// Returns the wizard's parameter store with the configured overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if an override names an unknown parameter.
    pub fn parameter_store(&self) -> Result<ParameterStore, ConfigError> {
        Sfm10Params::parameter_store()
            .with_overrides(&self.parameters)
            .map_err(|e| ConfigError::ValidationError {
                message: e.to_string(),
            })
    }
}

/// Drawing style configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Reference and value text height in mm.
    #[serde(default = "default_text_size")]
    pub text_size: f64,

    /// Silkscreen line width in mm.
    #[serde(default = "default_silkscreen_width")]
    pub silkscreen_line_width: f64,

    /// Courtyard line width in mm.
    #[serde(default = "default_courtyard_width")]
    pub courtyard_line_width: f64,
}

impl StyleConfig {
    /// Returns the stroke widths for the recording surface.
    #[must_use]
    pub const fn line_widths(&self) -> LineWidths {
        LineWidths {
            silkscreen: self.silkscreen_line_width,
            courtyard: self.courtyard_line_width,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
            silkscreen_line_width: default_silkscreen_width(),
            courtyard_line_width: default_courtyard_width(),
        }
    }
}

const fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

const fn default_silkscreen_width() -> f64 {
    0.15
}

const fn default_courtyard_width() -> f64 {
    0.05
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
