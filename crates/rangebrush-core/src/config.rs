//! Selector configuration and configuration errors.

use crate::label::LabelFormat;
use crate::scale::{Domain, LinearScale, PixelRange};
use crate::selection::Selection;
use crate::widget::{DEFAULT_EXTENT_HEIGHT, DEFAULT_HIT_MARGIN, SelectorOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors. These are the only fatal errors of the selector:
/// when one is returned, no selector is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid domain: min ({min}) must be less than max ({max})")]
    InvalidDomain { min: f64, max: f64 },
    #[error("Invalid pixel range: min ({min}) must be less than max ({max})")]
    InvalidPixelRange { min: f64, max: f64 },
    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
    #[error("Invalid hit margin: {0} (must be finite and non-negative)")]
    InvalidMargin(f64),
    #[error("Invalid extent height: {0} (must be finite and positive)")]
    InvalidHeight(f64),
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable selector configuration.
///
/// Every field has a default, so `{}` is a valid configuration describing a
/// `[0, 50]` domain drawn across 500 pixels with everything selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Legal input range `[min, max]`.
    pub domain: [f64; 2],
    /// On-screen extent `[min, max]` in pixels.
    pub pixel_range: [f64; 2],
    /// Starting selection; clamped into the domain.
    pub initial_selection: [f64; 2],
    /// Half-width of the resize hit-zones around each edge, in pixels.
    pub hit_margin: f64,
    /// Height of the extent rectangle, in pixels.
    pub extent_height: f64,
    /// Handle label format.
    pub label: LabelFormat,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            domain: [0.0, 50.0],
            pixel_range: [0.0, 500.0],
            initial_selection: [0.0, 50.0],
            hit_margin: DEFAULT_HIT_MARGIN,
            extent_height: DEFAULT_EXTENT_HEIGHT,
            label: LabelFormat::default(),
        }
    }
}

impl SelectorConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded selector config from {}", path.display());
        Ok(config)
    }

    /// Validate the domain and pixel range and build the scale.
    pub fn scale(&self) -> ConfigResult<LinearScale> {
        let domain = Domain::new(self.domain[0], self.domain[1])?;
        let range = PixelRange::new(self.pixel_range[0], self.pixel_range[1])?;
        Ok(LinearScale::new(domain, range))
    }

    /// Validate the interaction and layout options.
    pub fn options(&self) -> ConfigResult<SelectorOptions> {
        SelectorOptions::new(self.hit_margin, self.extent_height)
    }

    /// The initial selection as configured (not yet clamped).
    pub fn initial_selection(&self) -> Selection {
        Selection::from(self.initial_selection)
    }
}
