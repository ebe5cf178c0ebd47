//! Page runtime error types.

use std::io;

use showcase_detect::DetectError;
use showcase_dom::DomError;
use showcase_nav::NavError;
use thiserror::Error;

/// Errors raised while configuring or running the page.
#[derive(Error, Debug)]
pub enum PageError {
    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Registry construction or detection reporting failed.
    #[error("Detection error: {0}")]
    Detect(#[from] DetectError),

    /// Navigation failed.
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),

    /// A document operation failed.
    #[error("Document error: {0}")]
    Dom(#[from] DomError),

    /// The global tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for page operations.
pub type PageResult<T> = std::result::Result<T, PageError>;
