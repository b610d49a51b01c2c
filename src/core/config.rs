//! Pokedex configuration
//!
//! Read from an optional TOML file. Every field has a default, so an empty
//! file (or no file) is a valid configuration.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::error::{PokedexError, Result};
use crate::core::types::OutputFormat;

/// Configuration for the pokedex binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DexConfig {
    /// Format used when `--format` is not given on the command line
    pub default_format: OutputFormat,

    /// `tracing_subscriber` env-filter directive
    ///
    /// Overridden by `RUST_LOG` when that is set, and by `--verbose`.
    pub log_filter: String,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            log_filter: "pokedex=info".to_string(),
        }
    }
}

impl DexConfig {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate().map_err(PokedexError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Env-filter directive for the log subscriber
    pub fn log_directive(&self, verbose: bool) -> String {
        if verbose {
            "pokedex=debug".to_string()
        } else {
            self.log_filter.clone()
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.log_filter.trim().is_empty() {
            return Err("log_filter must not be empty".into());
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<DexConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static DexConfig {
    CONFIG.get_or_init(DexConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: DexConfig) -> std::result::Result<(), DexConfig> {
    CONFIG.set(config)
}
