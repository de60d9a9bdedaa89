//! Choice set declarations loaded from TOML and JSON documents.
//!
//! A document holds any number of named declarations. Sets and their
//! entries keep document order. Every declaration is validated and built
//! while loading; a document with one bad declaration yields an error, not a
//! partial catalog.

mod catalog;
mod error;
mod json_doc;
mod toml_doc;
mod value;

use std::fs;
use std::path::Path;

pub use catalog::ChoiceCatalog;
pub use error::ConfigError;
pub use json_doc::parse_json;
pub use toml_doc::parse_toml;
pub use value::ChoiceValue;

/// Document format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("toml") {
            Some(Format::Toml)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else {
            None
        }
    }

    pub fn parse(self, source: &str) -> Result<ChoiceCatalog, ConfigError> {
        match self {
            Format::Toml => parse_toml(source),
            Format::Json => parse_json(source),
        }
    }
}

/// Read and build every declaration in the file at `path`.
pub fn load(path: &Path) -> Result<ChoiceCatalog, ConfigError> {
    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let source = fs::read_to_string(path).map_err(|source| {
        tracing::warn!("Failed to read choice declarations at {:?}: {}", path, source);
        ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let catalog = format.parse(&source).inspect_err(|err| {
        tracing::warn!("Failed to parse choice declarations at {:?}: {}", path, err);
    })?;
    tracing::debug!(
        path = %path.display(),
        sets = catalog.len(),
        "loaded choice catalog"
    );
    Ok(catalog)
}
