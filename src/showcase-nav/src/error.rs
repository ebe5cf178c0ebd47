//! Navigation error types.

use showcase_dom::DomError;
use thiserror::Error;

/// Errors raised by the tab navigator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The document has no tab controls.
    #[error("no tabs found (class '{0}')")]
    EmptyTabs(String),

    /// The document has no sections.
    #[error("no sections found (class '{0}')")]
    EmptySections(String),

    /// No tab is bound to an existing section.
    #[error("no tab is bound to an existing section")]
    NoNavigableSections,

    /// The requested id is not a navigable section.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// A tab control has no target attribute.
    #[error("tab is missing its '{0}' attribute")]
    MissingTarget(String),

    /// The element is not one of the navigator's tabs.
    #[error("element is not a navigation tab")]
    NotATab,

    /// A document operation failed.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result type alias for navigation operations.
pub type NavResult<T> = std::result::Result<T, NavError>;
