//! # Showcase DOM
//!
//! A small in-memory document model for the feature showcase page.
//!
//! - [`document`]: the element tree, class and attribute mutation, focus and scroll requests
//! - [`element`]: element nodes and the [`ElementBuilder`] used to author subtrees
//! - [`history`]: the session history stack and current URL fragment
//! - [`error`]: error types
//!
//! ```
//! use showcase_dom::{Document, ElementBuilder, SessionHistory};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let tab = doc
//!     .append(root, ElementBuilder::new("button").class("nav-tab").attr("data-tab", "modals"))
//!     .unwrap();
//! doc.add_class(tab, "active").unwrap();
//! assert!(doc.has_class(tab, "active"));
//!
//! let mut history = SessionHistory::from_url("https://example.test/#carousel").unwrap();
//! history.push_fragment("modals");
//! assert_eq!(history.fragment().as_deref(), Some("modals"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod document;
pub mod element;
pub mod error;
pub mod history;

pub use document::{Document, ReadyState, ScrollBehavior, ScrollRequest};
pub use element::{Element, ElementBuilder, ElementKey};
pub use error::{DomError, DomResult};
pub use history::SessionHistory;
