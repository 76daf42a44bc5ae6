//! Error types for everycase-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest lookups and combination building.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No node in the manifest carries the requested `tagName`.
    #[error("couldn't find {tag} element")]
    TagNotFound { tag: String },

    /// The component declaration has no `attributes` sequence.
    #[error("element {tag} has no attributes list")]
    MissingAttributes { tag: String },

    /// An attribute declaration lacks a string `name` or `type.text`.
    #[error("attribute #{index} of {tag} is malformed: {reason}")]
    MalformedAttribute {
        tag: String,
        index: usize,
        reason: &'static str,
    },

    /// A type expression that yields no literal value.
    #[error("type of attribute {attribute} has no literal values: {text:?}")]
    MalformedTypeExpression { attribute: String, text: String },

    /// I/O failure while reading the configuration file.
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on config load, with serde_yaml's line context.
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CoreError {
    /// `true` for the expected "unknown tag" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::TagNotFound { .. })
    }
}
