//! Pin profiles loaded from TOML
//!
//! A profile names a set of [`PinOptions`] presets so that spacing and
//! priorities can be shared across call sites instead of repeated inline.
//!
//! ```toml
//! [metadata]
//! name = "compact"
//!
//! [defaults]
//! insets = 8
//!
//! [presets.card]
//! insets = { top = 16, left = 12, bottom = 16, right = 12 }
//! priority = 750
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::options::PinOptions;

/// Errors that can occur when loading a pin profile
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read pin profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse pin profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Named pin option presets
#[derive(Debug, Clone, Default)]
pub struct PinProfile {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Options used when a preset is not found
    pub defaults: PinOptions,
    pub presets: HashMap<String, PinOptions>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    defaults: PinOptions,
    #[serde(default)]
    presets: HashMap<String, PinOptions>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl PinProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let (name, description) = match parsed.metadata {
            Some(meta) => (meta.name, meta.description),
            None => (None, None),
        };

        Ok(PinProfile {
            name,
            description,
            defaults: parsed.defaults,
            presets: parsed.presets,
        })
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Option<PinOptions> {
        self.presets.get(name).copied()
    }

    /// Look up a preset, falling back to the profile defaults
    pub fn preset_or_default(&self, name: &str) -> PinOptions {
        match self.preset(name) {
            Some(options) => options,
            None => {
                tracing::debug!(preset = name, "unknown pin preset, using profile defaults");
                self.defaults
            }
        }
    }
}
