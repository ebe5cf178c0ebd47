//! # Showcase Nav
//!
//! Tab navigation for the showcase page. One section is visible at a time;
//! the visible section follows tab clicks, arrow/Home/End keys on a focused
//! tab, the URL fragment on load and back/forward history moves.
//!
//! ```
//! use showcase_dom::{Document, ElementBuilder, SessionHistory};
//! use showcase_nav::{NavConfig, TabNavigator};
//!
//! let mut document = Document::new();
//! let root = document.root();
//! for id in ["intro", "demo"] {
//!     document
//!         .append(root, ElementBuilder::new("button").class("nav-tab").attr("data-tab", id))
//!         .unwrap();
//!     document
//!         .append(root, ElementBuilder::new("section").id(id).class("feature-section"))
//!         .unwrap();
//! }
//!
//! let history = SessionHistory::from_url("https://showcase.test/#demo").unwrap();
//! let mut navigator = TabNavigator::attach(&document, NavConfig::default()).unwrap();
//! navigator.sync_with_location(&mut document, &history).unwrap();
//! assert_eq!(navigator.active_section(), Some("demo"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod keyboard;
pub mod navigator;
pub mod state;

pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use keyboard::{Key, KeyboardEvent, NavKey};
pub use navigator::{TabNavigator, Transition};
pub use state::{Step, TabOrder, Trigger, step};
