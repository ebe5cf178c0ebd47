//! Detector configuration.

use serde::{Deserialize, Serialize};

/// Class names and copy used when marking unsupported features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Class marking a section's support badge.
    pub badge_class: String,
    /// Class marking a section's demo container.
    pub demo_container_class: String,
    /// Authored support-level classes replaced on unsupported badges.
    pub support_level_classes: Vec<String>,
    /// Class applied to badges of unsupported features.
    pub not_supported_class: String,
    /// Badge text for unsupported features.
    pub not_supported_label: String,
    /// Class marking an inserted fallback message.
    pub fallback_class: String,
    /// Fallback message heading.
    pub fallback_title: String,
    /// Fallback message body.
    pub fallback_body: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            badge_class: String::from("support-badge"),
            demo_container_class: String::from("demo-container"),
            support_level_classes: vec![
                String::from("widely-supported"),
                String::from("good-support"),
                String::from("emerging"),
            ],
            not_supported_class: String::from("not-supported"),
            not_supported_label: String::from("Not Supported"),
            fallback_class: String::from("fallback-message"),
            fallback_title: String::from("Feature not supported"),
            fallback_body: String::from(
                "Your browser does not support this feature yet. \
                 The demo below may not work as intended.",
            ),
        }
    }
}
