//! Optional `mdicheck.toml` settings.
//!
//! Every key is optional. Explicit command-line values are layered on top
//! with [`CheckConfig::overlay`]; anything still unset falls back to the
//! built-in defaults below.

use crate::declaration::DEFAULT_DECLARATION_LABEL;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "mdicheck.toml";
pub const DEFAULT_METADATA_PATH: &str = "assets/mdi-icon-metadata.json.gz";
pub const DEFAULT_DECLARATIONS_PATH: &str = "scripts/regen_mdi_fonts.sh";
pub const DEFAULT_REMEDIATION: &str = "make update-mdi-cache";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Gzip-compressed metadata cache, relative to the repo root.
    #[serde(default)]
    pub metadata: Option<String>,
    /// Declaration script, relative to the repo root.
    #[serde(default)]
    pub declarations: Option<String>,
    /// Variable name that prefixes declaration lines.
    #[serde(default)]
    pub label: Option<String>,
    /// Command suggested when the metadata cache is unusable.
    #[serde(default)]
    pub remediation: Option<String>,
}

impl CheckConfig {
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::ParseToml {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: origin.clone(),
            source,
        })?;
        Self::from_toml_str(&text, &origin)
    }

    /// Like [`CheckConfig::load`], but an absent file yields the defaults.
    pub fn load_if_present(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Values set in `overrides` replace ours.
    pub fn overlay(self, overrides: CheckConfig) -> Self {
        Self {
            metadata: overrides.metadata.or(self.metadata),
            declarations: overrides.declarations.or(self.declarations),
            label: overrides.label.or(self.label),
            remediation: overrides.remediation.or(self.remediation),
        }
    }

    pub fn metadata_path(&self) -> &str {
        self.metadata.as_deref().unwrap_or(DEFAULT_METADATA_PATH)
    }

    pub fn declarations_path(&self) -> &str {
        self.declarations
            .as_deref()
            .unwrap_or(DEFAULT_DECLARATIONS_PATH)
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_DECLARATION_LABEL)
    }

    pub fn remediation(&self) -> &str {
        self.remediation.as_deref().unwrap_or(DEFAULT_REMEDIATION)
    }
}
