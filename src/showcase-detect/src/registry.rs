//! The feature registry.
//!
//! A registry is an ordered, id-unique list of [`FeatureEntry`] values. The
//! built-in table covers the features demonstrated on the showcase page;
//! tests and alternative pages can build their own from [`FeatureSpec`]s or
//! custom predicates.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capability::{
    Runtime, supports_condition_query, supports_selector_query, supports_style_query,
};
use crate::error::{DetectError, DetectResult};

/// A table-driven detection predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Probe {
    /// A `property: value` declaration.
    Style {
        /// CSS property.
        property: String,
        /// CSS value.
        value: String,
    },
    /// Selector syntax, checked through `selector(...)`.
    Selector {
        /// The selector to test.
        selector: String,
    },
    /// A pre-formed capability condition.
    Condition {
        /// The condition text.
        condition: String,
    },
    /// A global binding.
    Global {
        /// Name of the global.
        name: String,
    },
    /// A property on an interface prototype.
    PrototypeProperty {
        /// Interface name, e.g. `HTMLElement`.
        interface: String,
        /// Property name.
        property: String,
    },
}

impl Probe {
    /// Shorthand for [`Probe::Style`].
    pub fn style(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Style {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Shorthand for [`Probe::Selector`].
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
        }
    }

    /// Shorthand for [`Probe::Condition`].
    pub fn condition(condition: impl Into<String>) -> Self {
        Self::Condition {
            condition: condition.into(),
        }
    }

    /// Shorthand for [`Probe::Global`].
    pub fn global(name: impl Into<String>) -> Self {
        Self::Global { name: name.into() }
    }

    /// Shorthand for [`Probe::PrototypeProperty`].
    pub fn prototype_property(interface: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PrototypeProperty {
            interface: interface.into(),
            property: property.into(),
        }
    }

    /// Evaluates the probe. Never fails.
    pub fn evaluate(&self, runtime: &dyn Runtime) -> bool {
        match self {
            Probe::Style { property, value } => supports_style_query(runtime, property, value),
            Probe::Selector { selector } => supports_selector_query(runtime, selector),
            Probe::Condition { condition } => supports_condition_query(runtime, condition),
            Probe::Global { name } => runtime.has_global(name),
            Probe::PrototypeProperty {
                interface,
                property,
            } => runtime.has_prototype_property(interface, property),
        }
    }
}

/// A caller-supplied detection predicate.
pub type DetectFn = Arc<dyn Fn(&dyn Runtime) -> DetectResult<bool> + Send + Sync>;

/// How a feature is detected.
#[derive(Clone)]
pub enum Detection {
    /// A table-driven probe.
    Probe(Probe),
    /// An arbitrary predicate. It may fail; the detector isolates failures.
    Custom(DetectFn),
}

impl fmt::Debug for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detection::Probe(probe) => f.debug_tuple("Probe").field(probe).finish(),
            Detection::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A single registry entry.
#[derive(Debug, Clone)]
pub struct FeatureEntry {
    id: String,
    display_name: String,
    section_id: String,
    detection: Detection,
}

impl FeatureEntry {
    /// Creates an entry detected by a table-driven probe.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        section_id: impl Into<String>,
        probe: Probe,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            section_id: section_id.into(),
            detection: Detection::Probe(probe),
        }
    }

    /// Creates an entry detected by a custom predicate.
    pub fn custom<F>(
        id: impl Into<String>,
        display_name: impl Into<String>,
        section_id: impl Into<String>,
        detect: F,
    ) -> Self
    where
        F: Fn(&dyn Runtime) -> DetectResult<bool> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            section_id: section_id.into(),
            detection: Detection::Custom(Arc::new(detect)),
        }
    }

    /// Stable feature id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Id of the document section demonstrating the feature.
    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    /// The detection predicate.
    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    /// Runs the predicate without any isolation.
    pub fn detect(&self, runtime: &dyn Runtime) -> DetectResult<bool> {
        match &self.detection {
            Detection::Probe(probe) => Ok(probe.evaluate(runtime)),
            Detection::Custom(detect) => detect(runtime),
        }
    }
}

/// Serializable form of a probe-based entry, used by page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Stable feature id.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Section id.
    pub section: String,
    /// Detection probe.
    pub probe: Probe,
}

impl From<FeatureSpec> for FeatureEntry {
    fn from(spec: FeatureSpec) -> Self {
        FeatureEntry::new(spec.id, spec.name, spec.section, spec.probe)
    }
}

/// An ordered collection of features with unique ids.
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    entries: Vec<FeatureEntry>,
}

impl FeatureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The features demonstrated on the showcase page.
    pub fn builtin() -> Self {
        let entries = vec![
            FeatureEntry::new(
                "hasSelector",
                ":has() Selector",
                "has-selector",
                Probe::selector(":has(*)"),
            ),
            FeatureEntry::new(
                "containerQueries",
                "Container Queries",
                "container-queries",
                Probe::style("container-type", "inline-size"),
            ),
            FeatureEntry::new(
                "scrollSnap",
                "Scroll Snap",
                "carousel",
                Probe::style("scroll-snap-type", "x mandatory"),
            ),
            FeatureEntry::new(
                "popoverAPI",
                "Popover API",
                "modals",
                Probe::prototype_property("HTMLElement", "popover"),
            ),
            FeatureEntry::new(
                "startingStyle",
                "@starting-style",
                "entry-animations",
                Probe::condition("at-rule(@starting-style)"),
            ),
            FeatureEntry::new(
                "anchorPositioning",
                "Anchor Positioning",
                "tooltips",
                Probe::style("anchor-name", "--test"),
            ),
            FeatureEntry::new(
                "popoverTarget",
                "Popover Target",
                "dropdown-menus",
                Probe::prototype_property("HTMLButtonElement", "popoverTargetElement"),
            ),
            FeatureEntry::new(
                "intersectionObserver",
                "IntersectionObserver",
                "scroll-reveal",
                Probe::global("IntersectionObserver"),
            ),
            FeatureEntry::new(
                "scrollState",
                "scroll-state()",
                "sticky-header",
                Probe::style("scroll-state", "stuck"),
            ),
            FeatureEntry::new(
                "styleableSelect",
                "Styleable Select",
                "custom-select",
                Probe::style("appearance", "base-select"),
            ),
        ];
        Self { entries }
    }

    /// Builds a registry from serializable specs, preserving their order.
    pub fn from_specs(specs: impl IntoIterator<Item = FeatureSpec>) -> DetectResult<Self> {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec.into())?;
        }
        Ok(registry)
    }

    /// Appends an entry. Fails if its id is already registered.
    pub fn register(&mut self, entry: FeatureEntry) -> DetectResult<()> {
        if self.get(entry.id()).is_some() {
            return Err(DetectError::DuplicateFeature(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&FeatureEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FeatureRegistry {
    type Item = &'a FeatureEntry;
    type IntoIter = std::slice::Iter<'a, FeatureEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::capability::BrowserProfile;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_ids_and_sections_are_unique() {
        let registry = FeatureRegistry::builtin();
        assert_eq!(registry.len(), 10);

        let ids: HashSet<_> = registry.iter().map(FeatureEntry::id).collect();
        let sections: HashSet<_> = registry.iter().map(FeatureEntry::section_id).collect();
        assert_eq!(ids.len(), registry.len());
        assert_eq!(sections.len(), registry.len());
    }

    #[test]
    fn test_builtin_order() {
        let registry = FeatureRegistry::builtin();
        let ids: Vec<_> = registry.iter().map(FeatureEntry::id).collect();
        assert_eq!(
            ids,
            vec![
                "hasSelector",
                "containerQueries",
                "scrollSnap",
                "popoverAPI",
                "startingStyle",
                "anchorPositioning",
                "popoverTarget",
                "intersectionObserver",
                "scrollState",
                "styleableSelect",
            ]
        );
        assert_eq!(registry.get("scrollSnap").unwrap().section_id(), "carousel");
        assert_eq!(registry.get("popoverAPI").unwrap().section_id(), "modals");
    }

    #[test]
    fn test_evergreen_supports_every_builtin_feature() {
        let runtime = BrowserProfile::evergreen();
        for entry in &FeatureRegistry::builtin() {
            assert!(
                entry.detect(&runtime).unwrap(),
                "{} should be supported",
                entry.id()
            );
        }
    }

    #[test]
    fn test_no_css_api_leaves_only_scripting_features() {
        let runtime = BrowserProfile::evergreen().without_css_api();
        let supported: Vec<_> = FeatureRegistry::builtin()
            .iter()
            .filter(|entry| entry.detect(&runtime).unwrap())
            .map(|entry| entry.id().to_string())
            .collect();
        assert_eq!(
            supported,
            vec!["popoverAPI", "popoverTarget", "intersectionObserver"]
        );
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut registry = FeatureRegistry::new();
        registry
            .register(FeatureEntry::new("a", "A", "a", Probe::global("A")))
            .unwrap();
        let err = registry
            .register(FeatureEntry::new("a", "Again", "b", Probe::global("B")))
            .unwrap_err();
        assert!(matches!(err, DetectError::DuplicateFeature(ref id) if id == "a"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_specs_from_toml() {
        #[derive(Deserialize)]
        struct Table {
            features: Vec<FeatureSpec>,
        }

        let table: Table = toml::from_str(
            r#"
[[features]]
id = "grid"
name = "CSS Grid"
section = "layout"
probe = { kind = "style", property = "display", value = "grid" }

[[features]]
id = "observer"
name = "ResizeObserver"
section = "resize"
probe = { kind = "global", name = "ResizeObserver" }
"#,
        )
        .unwrap();

        let registry = FeatureRegistry::from_specs(table.features).unwrap();
        assert_eq!(registry.len(), 2);

        let runtime = BrowserProfile::default().with_declaration("display", "grid");
        assert!(registry.get("grid").unwrap().detect(&runtime).unwrap());
        assert!(!registry.get("observer").unwrap().detect(&runtime).unwrap());
    }

    #[test]
    fn test_custom_detection_debug() {
        let entry = FeatureEntry::custom("x", "X", "x", |_| Ok(true));
        assert_eq!(format!("{:?}", entry.detection()), "Custom(..)");
    }
}
