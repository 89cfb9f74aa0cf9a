//! Shared configuration loader for the pagemark toolchain.
//!
//! `defaults/pagemark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`PagemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pagemark_core::insert::InsertTimeouts;
use pagemark_core::Preset;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/pagemark.default.toml");

/// Top-level configuration consumed by pagemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PagemarkConfig {
    pub credentials: CredentialsConfig,
    pub generation: GenerationConfig,
    pub insertion: InsertionConfig,
    pub presets: Vec<PresetConfig>,
}

/// API credentials. Empty strings mean not configured.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    pub gemini_api_key: String,
    pub notion_api_key: String,
}

/// Image generation endpoint and sampling knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub api_base: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
}

/// Caret-insertion waits, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InsertionConfig {
    pub focus_timeout_ms: u64,
    pub caret_settle_ms: u64,
    pub paste_timeout_ms: u64,
}

impl From<InsertionConfig> for InsertTimeouts {
    fn from(config: InsertionConfig) -> Self {
        InsertTimeouts {
            focus: Duration::from_millis(config.focus_timeout_ms),
            caret_settle: Duration::from_millis(config.caret_settle_ms),
            paste: Duration::from_millis(config.paste_timeout_ms),
        }
    }
}

/// One named style preset for prompt composition.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetConfig {
    pub name: String,
    pub prompt: String,
}

impl From<PresetConfig> for Preset {
    fn from(config: PresetConfig) -> Self {
        Preset::new(config.name, config.prompt)
    }
}

impl From<&PresetConfig> for Preset {
    fn from(config: &PresetConfig) -> Self {
        Preset::new(config.name.clone(), config.prompt.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PagemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PagemarkConfig, ConfigError> {
    Loader::new().build()
}
