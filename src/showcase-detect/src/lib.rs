//! # Showcase Detect
//!
//! Detects which modern CSS and DOM features the current runtime supports
//! and reflects the answer on the showcase page.
//!
//! - [`capability`]: the [`Runtime`] / [`CssSupports`] traits, the query helpers and
//!   the table-driven [`BrowserProfile`]
//! - [`registry`]: the ordered [`FeatureRegistry`] and its probes
//! - [`detector`]: the full sweep and the side-effect-free diagnostic snapshot
//! - [`badge`]: support badge and fallback message updates
//!
//! ```
//! use showcase_detect::{BrowserProfile, FeatureDetector};
//! use showcase_dom::Document;
//!
//! let detector = FeatureDetector::default();
//! let mut document = Document::new();
//! let results = detector.detect_all(&BrowserProfile::evergreen(), &mut document);
//! assert!(results.values().all(|supported| *supported));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod badge;
pub mod capability;
pub mod config;
pub mod detector;
pub mod error;
pub mod registry;

pub use badge::{BadgeUpdate, FallbackInsert, show_fallback_message, update_support_badge};
pub use capability::{
    BrowserProfile, CssSupports, Runtime, supports_condition_query, supports_selector_query,
    supports_style_query,
};
pub use config::DetectorConfig;
pub use detector::{FeatureDetector, FeatureStatus};
pub use error::{DetectError, DetectResult};
pub use registry::{DetectFn, Detection, FeatureEntry, FeatureRegistry, FeatureSpec, Probe};
