//! Error taxonomy for a conversion run.
//!
//! Fatal errors unwind the whole run; soft data-quality issues are logged
//! as warnings at the point of discovery and never surface here. See
//! [`crate::converter::entity_info::require_value`] for the debug-mode
//! downgrade of value-presence checks.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A URI-bearing tag value could not be parsed.
    #[error("unable to parse URI ({value}) for entity ({path}): {source}")]
    InvalidUri {
        value: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// A URI the assignment phase guarantees was absent at emission time.
    #[error("unable to find {kind} URI for entity ({path})")]
    MissingUri { kind: &'static str, path: String },

    /// A required value was absent and debug mode did not downgrade it.
    #[error("{0}")]
    MissingValue(String),

    #[error("target diagram with id {id} not found in the model")]
    NoTargetDiagram { id: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
