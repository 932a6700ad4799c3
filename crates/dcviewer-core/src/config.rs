use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LICENSE_PATH, DEFAULT_LOG_EXPONENT};
use crate::error::ConfigError;
use crate::overlay::SelectorConfig;
use crate::stretch::StretchTransform;

/// User-editable viewer settings, stored as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Stretch active at startup.
    pub default_stretch: StretchTransform,
    /// `a` in the logarithmic stretch.
    pub log_exponent: f32,
    pub selector: SelectorConfig,
    /// Text shown by Help > License.
    pub license_path: PathBuf,
    pub window_title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_stretch: StretchTransform::default(),
            log_exponent: DEFAULT_LOG_EXPONENT,
            selector: SelectorConfig::default(),
            license_path: PathBuf::from(DEFAULT_LICENSE_PATH),
            window_title: "DCViewer".into(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `path` if it exists, otherwise defaults. Parse errors are logged
    /// and also fall back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config: {e}");
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
