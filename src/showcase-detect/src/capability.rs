//! Runtime capability queries.
//!
//! The page never inspects the browser directly. It asks a [`Runtime`] for
//! its style-capability API and a couple of scripting surface checks, which
//! keeps every probe testable against a [`BrowserProfile`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DetectResult;

/// The style-capability API (`CSS.supports`).
pub trait CssSupports {
    /// Returns true if the `property: value` declaration is understood.
    fn supports(&self, property: &str, value: &str) -> bool;

    /// Returns true if a pre-formed condition such as `(display: grid)` or
    /// `selector(:has(*))` is understood.
    fn supports_condition(&self, condition: &str) -> bool;
}

/// The execution environment the probes run against.
pub trait Runtime {
    /// Returns the style-capability API, or `None` if the runtime has none.
    fn css(&self) -> Option<&dyn CssSupports>;

    /// Returns true if a global binding (constructor, namespace) exists.
    fn has_global(&self, name: &str) -> bool;

    /// Returns true if `property` exists on the prototype of `interface`.
    fn has_prototype_property(&self, interface: &str, property: &str) -> bool;
}

/// Queries the style-capability API for a `property: value` pair.
///
/// Returns false when the runtime has no such API.
pub fn supports_style_query(runtime: &dyn Runtime, property: &str, value: &str) -> bool {
    runtime
        .css()
        .is_some_and(|css| css.supports(property, value))
}

/// Queries selector-syntax support by wrapping `selector` in `selector(...)`.
///
/// Returns false when the runtime has no style-capability API.
pub fn supports_selector_query(runtime: &dyn Runtime, selector: &str) -> bool {
    supports_condition_query(runtime, &format!("selector({selector})"))
}

/// Queries the style-capability API with a pre-formed condition.
pub fn supports_condition_query(runtime: &dyn Runtime, condition: &str) -> bool {
    runtime
        .css()
        .is_some_and(|css| css.supports_condition(condition))
}

/// A table-driven runtime describing what a browser understands.
///
/// Profiles can be authored in TOML:
///
/// ```toml
/// name = "legacy"
/// css_api = true
/// selectors = [":is(*)"]
/// globals = ["IntersectionObserver"]
///
/// [declarations]
/// "scroll-snap-type" = ["x mandatory"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserProfile {
    /// Human-readable profile name.
    pub name: String,
    /// Whether the style-capability API exists at all.
    pub css_api: bool,
    /// Supported declarations: property to accepted values.
    pub declarations: IndexMap<String, Vec<String>>,
    /// Supported selectors.
    pub selectors: Vec<String>,
    /// Supported at-rules, including the leading `@`.
    pub at_rules: Vec<String>,
    /// Conditions accepted verbatim.
    pub conditions: Vec<String>,
    /// Global bindings.
    pub globals: Vec<String>,
    /// Prototype properties written as `Interface.property`.
    pub prototype_properties: Vec<String>,
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self {
            name: String::from("custom"),
            css_api: true,
            declarations: IndexMap::new(),
            selectors: Vec::new(),
            at_rules: Vec::new(),
            conditions: Vec::new(),
            globals: Vec::new(),
            prototype_properties: Vec::new(),
        }
    }
}

impl BrowserProfile {
    /// A runtime without a style-capability API or any scripting features.
    pub fn none() -> Self {
        Self {
            name: String::from("none"),
            css_api: false,
            ..Self::default()
        }
    }

    /// A current browser supporting every built-in showcase feature.
    pub fn evergreen() -> Self {
        Self {
            name: String::from("evergreen"),
            ..Self::default()
        }
        .with_selector(":has(*)")
        .with_declaration("container-type", "inline-size")
        .with_declaration("scroll-snap-type", "x mandatory")
        .with_prototype_property("HTMLElement", "popover")
        .with_at_rule("@starting-style")
        .with_declaration("anchor-name", "--test")
        .with_prototype_property("HTMLButtonElement", "popoverTargetElement")
        .with_global("IntersectionObserver")
        .with_declaration("scroll-state", "stuck")
        .with_declaration("appearance", "base-select")
    }

    /// Parses a profile from TOML.
    pub fn from_toml_str(input: &str) -> DetectResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Sets the profile name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Removes the style-capability API.
    pub fn without_css_api(mut self) -> Self {
        self.css_api = false;
        self
    }

    /// Adds a supported declaration.
    pub fn with_declaration(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let values = self.declarations.entry(property.into()).or_default();
        let value = value.into();
        if !values.contains(&value) {
            values.push(value);
        }
        self
    }

    /// Adds a supported selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    /// Adds a supported at-rule.
    pub fn with_at_rule(mut self, at_rule: impl Into<String>) -> Self {
        self.at_rules.push(at_rule.into());
        self
    }

    /// Adds a condition accepted verbatim.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// Adds a global binding.
    pub fn with_global(mut self, name: impl Into<String>) -> Self {
        self.globals.push(name.into());
        self
    }

    /// Adds a prototype property.
    pub fn with_prototype_property(mut self, interface: &str, property: &str) -> Self {
        self.prototype_properties
            .push(format!("{interface}.{property}"));
        self
    }
}

/// Strips `name(` ... `)` from `condition`.
fn function_argument<'a>(condition: &'a str, name: &str) -> Option<&'a str> {
    condition
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

impl CssSupports for BrowserProfile {
    fn supports(&self, property: &str, value: &str) -> bool {
        self.declarations
            .get(property.trim())
            .is_some_and(|values| values.iter().any(|v| v == value.trim()))
    }

    fn supports_condition(&self, condition: &str) -> bool {
        let condition = condition.trim();
        if self.conditions.iter().any(|c| c == condition) {
            return true;
        }
        if let Some(selector) = function_argument(condition, "selector") {
            return self.selectors.iter().any(|s| s == selector);
        }
        if let Some(at_rule) = function_argument(condition, "at-rule") {
            return self.at_rules.iter().any(|r| r == at_rule);
        }
        condition
            .strip_prefix('(')
            .and_then(|c| c.strip_suffix(')'))
            .and_then(|declaration| declaration.split_once(':'))
            .is_some_and(|(property, value)| self.supports(property, value))
    }
}

impl Runtime for BrowserProfile {
    fn css(&self) -> Option<&dyn CssSupports> {
        if self.css_api {
            Some(self as &dyn CssSupports)
        } else {
            None
        }
    }

    fn has_global(&self, name: &str) -> bool {
        self.globals.iter().any(|g| g == name)
    }

    fn has_prototype_property(&self, interface: &str, property: &str) -> bool {
        self.prototype_properties
            .iter()
            .filter_map(|entry| entry.split_once('.'))
            .any(|(i, p)| i == interface && p == property)
    }
}
