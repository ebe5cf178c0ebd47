//! Error types for document operations.

use thiserror::Error;

use crate::element::ElementKey;

/// Errors produced by the document model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// The key does not refer to an element of this document.
    #[error("unknown element: {0:?}")]
    UnknownElement(ElementKey),

    /// A URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias for document operations.
pub type DomResult<T> = std::result::Result<T, DomError>;
