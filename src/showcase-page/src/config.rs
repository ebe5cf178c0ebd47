//! Page configuration.
//!
//! Every section and field has a default, so an empty file yields the stock
//! showcase page:
//!
//! ```toml
//! [logging]
//! level = "debug"
//! json = false
//!
//! [detector]
//! not_supported_label = "Unavailable"
//!
//! [navigation]
//! scroll_behavior = "auto"
//!
//! [[features]]
//! id = "hasSelector"
//! name = ":has() Selector"
//! section = "has-selector"
//! probe = { kind = "selector", selector = ":has(*)" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use showcase_detect::{DetectorConfig, FeatureRegistry, FeatureSpec};
use showcase_nav::NavConfig;

use crate::error::PageResult;

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of pretty output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            json: false,
        }
    }
}

/// Top-level page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Logging settings.
    pub logging: LogConfig,
    /// Badge and fallback markup.
    pub detector: DetectorConfig,
    /// Tab and section markup.
    pub navigation: NavConfig,
    /// Replaces the built-in feature table when present.
    pub features: Option<Vec<FeatureSpec>>,
}

impl PageConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(input: &str) -> PageResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Loads a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds the feature registry: the configured table, or the built-in one.
    pub fn registry(&self) -> PageResult<FeatureRegistry> {
        match &self.features {
            Some(specs) => Ok(FeatureRegistry::from_specs(specs.iter().cloned())?),
            None => Ok(FeatureRegistry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use pretty_assertions::assert_eq;
    use showcase_detect::Probe;
    use showcase_dom::ScrollBehavior;

    #[test]
    fn test_empty_config_is_default() {
        let config = PageConfig::from_toml_str("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.registry().unwrap().len(), 10);
    }

    #[test]
    fn test_partial_sections() {
        let config = PageConfig::from_toml_str(
            r#"
            [logging]
            json = true

            [navigation]
            scroll_behavior = "auto"
            "#,
        )
        .unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Auto);
        assert_eq!(config.navigation.tab_class, "nav-tab");
        assert_eq!(config.detector, DetectorConfig::default());
    }

    #[test]
    fn test_custom_features() {
        let config = PageConfig::from_toml_str(
            r#"
            [[features]]
            id = "observer"
            name = "IntersectionObserver"
            section = "scroll-reveal"
            probe = { kind = "global", name = "IntersectionObserver" }

            [[features]]
            id = "sticky"
            name = "Sticky"
            section = "sticky-header"
            probe = { kind = "style", property = "position", value = "sticky" }
            "#,
        )
        .unwrap();

        let registry = config.registry().unwrap();
        let ids: Vec<_> = registry.iter().map(|entry| entry.id()).collect();
        assert_eq!(ids, vec!["observer", "sticky"]);
        assert_eq!(
            config.features.unwrap()[1].probe,
            Probe::style("position", "sticky")
        );
    }

    #[test]
    fn test_duplicate_feature_ids_rejected() {
        let config = PageConfig::from_toml_str(
            r#"
            [[features]]
            id = "a"
            name = "A"
            section = "one"
            probe = { kind = "global", name = "A" }

            [[features]]
            id = "a"
            name = "A again"
            section = "two"
            probe = { kind = "global", name = "B" }
            "#,
        )
        .unwrap();
        assert!(matches!(config.registry(), Err(PageError::Detect(_))));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            PageConfig::from_toml_str("[logging]\njson = \"yes\""),
            Err(PageError::Config(_))
        ));
    }
}
