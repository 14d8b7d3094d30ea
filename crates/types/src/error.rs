//! Unified error type for the layerconf workspace.

use std::path::PathBuf;
use thiserror::Error;

/// Enumerates all error kinds that can occur across layerconf crates.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document bytes are not valid UTF-8 or not valid YAML.
    #[error("parse error: {0}")]
    Parse(String),

    /// The document parsed, but its top level is a scalar or a sequence.
    #[error("document root is not a mapping")]
    NotAMapping,

    /// A section sub-tree does not fit the shape of its destination.
    #[error("cannot materialize section `{section}`: {message}")]
    Materialize { section: String, message: String },

    /// A configuration file could not be read.
    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file watcher could not be created or registered.
    #[error("watch error: {0}")]
    Watch(String),
}

impl ConfigError {
    /// Builds a [`ConfigError::Materialize`] for the given section.
    pub fn materialize(section: impl Into<String>, message: impl ToString) -> Self {
        Self::Materialize {
            section: section.into(),
            message: message.to_string(),
        }
    }

    /// Returns `true` if the error came from the document itself rather than
    /// from the filesystem or a destination.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::NotAMapping)
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConfigError>;
