//! # Showcase Page
//!
//! Runs the showcase page enhancements against a document: feature
//! detection once the document is ready, and tab navigation driven by
//! clicks, key presses and history moves.
//!
//! ```
//! use showcase_detect::{BrowserProfile, FeatureRegistry};
//! use showcase_dom::SessionHistory;
//! use showcase_page::{Page, PageConfig, PageEvent, template};
//!
//! let document = template::showcase_document(&FeatureRegistry::builtin()).unwrap();
//! let history = SessionHistory::from_url("https://showcase.test/#modals").unwrap();
//! let mut page = Page::new(document, history, BrowserProfile::evergreen(), PageConfig::default())
//!     .unwrap();
//!
//! assert!(!page.is_started());
//! page.dispatch(PageEvent::DomContentLoaded).unwrap();
//! assert_eq!(page.active_section(), Some("modals"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod template;

pub use config::{LogConfig, PageConfig};
pub use error::{PageError, PageResult};
pub use logging::init_logging;
pub use page::{EventOutcome, Page, PageEvent};
pub use template::{SupportLevel, showcase_document, showcase_document_with};
