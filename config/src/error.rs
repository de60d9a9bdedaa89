use std::io;
use std::path::{Path, PathBuf};

use choices_types::DeclarationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unsupported declaration file {}: expected a .toml or .json extension", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml_edit::TomlError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("choice set {set:?} must be a table")]
    NotATable { set: String },
    #[error("choice {set}.{choice} has an unsupported {kind} value")]
    UnsupportedValue {
        set: String,
        choice: String,
        kind: &'static str,
    },
    #[error("choice {set}.{choice} must be a scalar or a [value, \"label\"] pair")]
    MalformedLabel { set: String, choice: String },
    #[error("choice set {set:?} is declared more than once")]
    DuplicateSet { set: String },
    #[error("choice set {set:?}: {source}")]
    Declaration {
        set: String,
        source: DeclarationError,
    },
}

impl ConfigError {
    /// The file involved, for errors raised while locating or reading it.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::UnsupportedFormat { path } => Some(path),
            _ => None,
        }
    }

    /// The choice set being processed when the error was raised.
    #[must_use]
    pub fn set(&self) -> Option<&str> {
        match self {
            ConfigError::NotATable { set }
            | ConfigError::UnsupportedValue { set, .. }
            | ConfigError::MalformedLabel { set, .. }
            | ConfigError::DuplicateSet { set }
            | ConfigError::Declaration { set, .. } => Some(set),
            _ => None,
        }
    }
}
