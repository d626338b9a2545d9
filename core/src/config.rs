//! Keyword list configuration.
//!
//! The marker lists are configurable data rather than hardcoded logic: a
//! TOML file with `fake_markers` and `real_markers` arrays replaces the
//! built-in lists wholesale.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::classifier::KeywordClassifier;
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
    pub fake_markers: Vec<String>,
    pub real_markers: Vec<String>,
}

impl KeywordConfig {
    /// Read and validate a keyword file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: KeywordConfig =
            toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fake_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::BlankMarker {
                key: "fake_markers",
            });
        }
        if self.real_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigError::BlankMarker {
                key: "real_markers",
            });
        }
        Ok(())
    }
}

impl From<KeywordConfig> for KeywordClassifier {
    fn from(config: KeywordConfig) -> Self {
        KeywordClassifier::new(config.fake_markers, config.real_markers)
    }
}
