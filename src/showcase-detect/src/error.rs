//! Feature detection error types.

use showcase_dom::DomError;
use thiserror::Error;

/// Errors raised while building registries or probing features.
#[derive(Error, Debug)]
pub enum DetectError {
    /// Two registry entries share an id.
    #[error("Duplicate feature id: {0}")]
    DuplicateFeature(String),

    /// A detection predicate failed.
    #[error("Probe failed for '{feature}': {message}")]
    ProbeFailed {
        /// Feature whose predicate failed.
        feature: String,
        /// Failure description.
        message: String,
    },

    /// A browser profile or feature table could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Diagnostic export failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A document operation failed.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result type alias for detection operations.
pub type DetectResult<T> = std::result::Result<T, DetectError>;
