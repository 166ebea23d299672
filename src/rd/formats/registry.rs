//! Named output formats
//!
//! The command line picks a format by name; grammar tools can add their own by implementing
//! [`Formatter`] and registering it.

use crate::rd::snapshot::{ToSnapshot, TreeSnapshot};
use std::collections::HashMap;
use std::fmt;

/// Failure to produce output in a requested format
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter is registered under this name
    FormatNotFound(String),
    /// The serializer rejected the snapshot
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Turns a tree snapshot into text.
pub trait Formatter: Send + Sync {
    /// Lookup key, also shown by `--list-formats`
    fn name(&self) -> &str;

    fn serialize(&self, snapshot: &TreeSnapshot) -> Result<String, FormatError>;

    /// One-line summary for listings
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of tree formatters, looked up by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Add `formatter`, replacing any formatter already registered under its name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Snapshot `tree` and render it with the formatter called `format`.
    pub fn serialize<N: ToSnapshot + ?Sized>(
        &self,
        tree: &N,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(&tree.to_snapshot())
    }

    /// Registered names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry holding treeviz, json and yaml
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
