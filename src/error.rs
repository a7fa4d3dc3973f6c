use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind for configuration failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigErrorKind {
    /// The configuration text is not a well-formed YAML/JSON mapping.
    Syntax,
    /// A field has the wrong shape (e.g. `max_no_space: "three"`).
    TypeMismatch,
    /// Neither `groups` nor a `style` preset was configured.
    MissingGroups,
    /// The requested preset does not exist in the store.
    PresetNotFound,
    /// The preset exists but could not be read.
    PresetUnreadable,
    /// The preset was read but is not a valid group mapping.
    PresetMalformed,
}

/// Produced while parsing or compiling a group configuration.
///
/// Always fatal: no node is checked with a configuration that failed to compile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
}

impl ConfigError {
    pub(crate) fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        ConfigError {
            kind,
            message: message.into(),
            preset: None,
        }
    }

    pub(crate) fn preset(kind: ConfigErrorKind, name: &str, message: impl Into<String>) -> Self {
        ConfigError {
            kind,
            message: message.into(),
            preset: Some(name.to_string()),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.preset {
            Some(name) => write!(f, "preset '{}': {}", name, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ConfigError {}
