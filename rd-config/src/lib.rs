//! Shared configuration loader for the rd tool.
//!
//! The defaults live in `defaults/rd.default.toml` and are compiled in, so every key
//! always has a value. Files and single-key overrides are layered over them with
//! [`Loader`], and the result is deserialized into [`RdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/rd.default.toml");

/// Top-level configuration consumed by rd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RdConfig {
    pub output: OutputConfig,
}

/// Controls how parse results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Name of a registered tree format (treeviz, json, yaml).
    pub format: String,
    pub trace: TraceMode,
}

/// When the trace tree is printed next to the parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceMode {
    Never,
    OnFailure,
    Always,
}

impl TraceMode {
    /// Whether the trace should be shown for a parse that succeeded or failed.
    pub fn shows(self, succeeded: bool) -> bool {
        match self {
            TraceMode::Never => false,
            TraceMode::OnFailure => !succeeded,
            TraceMode::Always => true,
        }
    }
}

/// Builds an [`RdConfig`] from the embedded defaults plus whatever the caller layers on top.
/// Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists, e.g. `rd.toml` in the working directory.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set a single dotted key, as the command line flags do.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<RdConfig, ConfigError> {
    Loader::new().build()
}
