//! The static showcase document.
//!
//! Builds the markup the enhancements expect: a tab bar with one tab per
//! feature, and a content region with one section per feature holding an
//! authored support badge and a demo container.

use showcase_detect::{DetectorConfig, FeatureRegistry};
use showcase_dom::{Document, DomResult, ElementBuilder};
use showcase_nav::NavConfig;

/// Authored support level for a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportLevel {
    /// Shipped in every evergreen engine.
    Widely,
    /// Shipped in most engines.
    Good,
    /// Shipped in one engine or behind flags.
    Emerging,
}

impl SupportLevel {
    /// Level for a built-in feature id. Unknown ids are treated as emerging.
    pub fn for_feature(id: &str) -> Self {
        match id {
            "hasSelector" | "containerQueries" | "scrollSnap" | "intersectionObserver" => {
                SupportLevel::Widely
            }
            "popoverAPI" | "startingStyle" | "popoverTarget" => SupportLevel::Good,
            _ => SupportLevel::Emerging,
        }
    }

    /// Badge class for this level.
    pub fn class(self) -> &'static str {
        match self {
            SupportLevel::Widely => "widely-supported",
            SupportLevel::Good => "good-support",
            SupportLevel::Emerging => "emerging",
        }
    }

    /// Badge text for this level.
    pub fn label(self) -> &'static str {
        match self {
            SupportLevel::Widely => "Widely Supported",
            SupportLevel::Good => "Good Support",
            SupportLevel::Emerging => "Emerging",
        }
    }
}

/// Builds the showcase document with the default markup classes.
pub fn showcase_document(registry: &FeatureRegistry) -> DomResult<Document> {
    showcase_document_with(registry, &DetectorConfig::default(), &NavConfig::default())
}

/// Builds the showcase document using the given markup classes.
///
/// The returned document is still in the `Loading` state.
pub fn showcase_document_with(
    registry: &FeatureRegistry,
    detector: &DetectorConfig,
    navigation: &NavConfig,
) -> DomResult<Document> {
    let mut document = Document::new();
    let root = document.root();

    document.append(
        root,
        ElementBuilder::new("header")
            .class("site-header")
            .child(ElementBuilder::new("h1").text("Modern Web Platform Features")),
    )?;

    let tabs = registry.iter().map(|entry| {
        ElementBuilder::new("button")
            .id(format!("tab-{}", entry.section_id()))
            .class(navigation.tab_class.as_str())
            .attr("type", "button")
            .attr("role", "tab")
            .attr("aria-controls", entry.section_id())
            .attr(navigation.target_attribute.as_str(), entry.section_id())
            .text(entry.display_name())
    });
    document.append(
        root,
        ElementBuilder::new("nav")
            .class("tab-nav")
            .attr("role", "tablist")
            .attr("aria-label", "Features")
            .children(tabs),
    )?;

    let sections = registry.iter().map(|entry| {
        let level = SupportLevel::for_feature(entry.id());
        ElementBuilder::new("section")
            .id(entry.section_id())
            .class(navigation.section_class.as_str())
            .attr("role", "tabpanel")
            .attr("aria-labelledby", format!("tab-{}", entry.section_id()))
            .child(
                ElementBuilder::new("header")
                    .class("section-header")
                    .child(ElementBuilder::new("h2").text(entry.display_name()))
                    .child(
                        ElementBuilder::new("span")
                            .class(detector.badge_class.as_str())
                            .class(level.class())
                            .text(level.label()),
                    ),
            )
            .child(
                ElementBuilder::new("div")
                    .class(detector.demo_container_class.as_str())
                    .child(
                        ElementBuilder::new("p")
                            .class("demo-placeholder")
                            .text(format!("{} demo", entry.display_name())),
                    ),
            )
    });
    document.append(
        root,
        ElementBuilder::new("main")
            .class(navigation.content_class.as_str())
            .children(sections),
    )?;

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_tab_and_section_per_feature() {
        let registry = FeatureRegistry::builtin();
        let document = showcase_document(&registry).unwrap();

        let tabs = document.elements_by_class("nav-tab");
        let sections = document.elements_by_class("feature-section");
        assert_eq!(tabs.len(), registry.len());
        assert_eq!(sections.len(), registry.len());

        for ((entry, tab), section) in registry.iter().zip(&tabs).zip(&sections) {
            assert_eq!(document.attribute(*tab, "data-tab"), Some(entry.section_id()));
            assert_eq!(document.get(*section).unwrap().id(), Some(entry.section_id()));
            assert!(
                document
                    .find_descendant_by_class(*section, "demo-container")
                    .is_some()
            );
        }
    }

    #[test]
    fn test_badges_are_authored_with_levels() {
        let document = showcase_document(&FeatureRegistry::builtin()).unwrap();
        let section = document.element_by_id("tooltips").unwrap();
        let badge = document
            .find_descendant_by_class(section, "support-badge")
            .unwrap();
        assert!(document.has_class(badge, "emerging"));
        assert_eq!(document.text_content(badge), "Emerging");

        let section = document.element_by_id("carousel").unwrap();
        let badge = document
            .find_descendant_by_class(section, "support-badge")
            .unwrap();
        assert!(document.has_class(badge, "widely-supported"));
    }

    #[test]
    fn test_custom_classes() {
        let navigation = NavConfig {
            tab_class: "tab".into(),
            ..NavConfig::default()
        };
        let document = showcase_document_with(
            &FeatureRegistry::builtin(),
            &DetectorConfig::default(),
            &navigation,
        )
        .unwrap();
        assert_eq!(document.elements_by_class("tab").len(), 10);
        assert!(document.elements_by_class("nav-tab").is_empty());
    }
}
