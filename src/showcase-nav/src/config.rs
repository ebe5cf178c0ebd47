//! Navigator configuration.

use serde::{Deserialize, Serialize};
use showcase_dom::ScrollBehavior;

/// Markup contract between the navigator and the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Class marking tab controls.
    pub tab_class: String,
    /// Class marking navigable sections.
    pub section_class: String,
    /// Class marking the active tab and the visible section.
    pub active_class: String,
    /// Attribute holding a tab's target section id.
    pub target_attribute: String,
    /// Class of the content region scrolled into view after a transition.
    pub content_class: String,
    /// Scroll animation for that region.
    pub scroll_behavior: ScrollBehavior,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            tab_class: String::from("nav-tab"),
            section_class: String::from("feature-section"),
            active_class: String::from("active"),
            target_attribute: String::from("data-tab"),
            content_class: String::from("main-content"),
            scroll_behavior: ScrollBehavior::Smooth,
        }
    }
}
