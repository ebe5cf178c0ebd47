//! The tab navigator.
//!
//! Owns the active section and keeps the tab list, the sections, the URL
//! fragment and keyboard focus in agreement. Transition rules live in
//! [`crate::state`]; this type resolves document elements and applies the
//! resulting steps.

use indexmap::IndexMap;
use showcase_dom::{Document, ElementKey, SessionHistory};
use tracing::debug;

use crate::config::NavConfig;
use crate::error::{NavError, NavResult};
use crate::keyboard::{KeyboardEvent, NavKey};
use crate::state::{Step, TabOrder, Trigger, step};

/// A tab control and the section id it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TabBinding {
    key: ElementKey,
    target: Option<String>,
}

/// A completed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The previously active section, `None` for the first transition.
    pub from: Option<String>,
    /// The newly active section.
    pub to: String,
}

/// Tab navigation controller for a showcase document.
#[derive(Debug, Clone)]
pub struct TabNavigator {
    config: NavConfig,
    tabs: Vec<TabBinding>,
    sections: Vec<ElementKey>,
    section_index: IndexMap<String, ElementKey>,
    order: TabOrder,
    /// Representative tab for each entry of `order`.
    order_tabs: Vec<ElementKey>,
    content: Option<ElementKey>,
    active: Option<usize>,
}

impl TabNavigator {
    /// Collects tabs and sections from `document`.
    ///
    /// A section is navigable when some tab is bound to its id. Navigable
    /// sections are ordered by their first bound tab.
    pub fn attach(document: &Document, config: NavConfig) -> NavResult<Self> {
        let tabs: Vec<TabBinding> = document
            .elements_by_class(&config.tab_class)
            .into_iter()
            .map(|key| TabBinding {
                key,
                target: document
                    .attribute(key, &config.target_attribute)
                    .filter(|target| !target.is_empty())
                    .map(str::to_string),
            })
            .collect();
        if tabs.is_empty() {
            return Err(NavError::EmptyTabs(config.tab_class));
        }

        let sections = document.elements_by_class(&config.section_class);
        if sections.is_empty() {
            return Err(NavError::EmptySections(config.section_class));
        }

        let mut section_index = IndexMap::new();
        for &key in &sections {
            if let Some(id) = document.get(key).and_then(|element| element.id()) {
                section_index.entry(id.to_string()).or_insert(key);
            }
        }

        let mut ids = Vec::new();
        let mut order_tabs = Vec::new();
        for tab in &tabs {
            let Some(target) = tab.target.as_deref() else {
                continue;
            };
            if section_index.contains_key(target) && !ids.iter().any(|id| id == target) {
                ids.push(target.to_string());
                order_tabs.push(tab.key);
            }
        }
        if ids.is_empty() {
            return Err(NavError::NoNavigableSections);
        }

        let content = document
            .elements_by_class(&config.content_class)
            .into_iter()
            .next();

        debug!(
            tabs = tabs.len(),
            sections = sections.len(),
            navigable = ids.len(),
            "Attached tab navigator"
        );

        Ok(Self {
            config,
            tabs,
            sections,
            section_index,
            order: TabOrder::new(ids),
            order_tabs,
            content,
            active: None,
        })
    }

    /// Returns the navigator configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Returns the navigable section ids in tab order.
    pub fn order(&self) -> &TabOrder {
        &self.order
    }

    /// Returns the active section id, `None` before the first transition.
    pub fn active_section(&self) -> Option<&str> {
        self.active.and_then(|index| self.order.get(index))
    }

    /// Returns the tab control representing the active section.
    pub fn active_tab(&self) -> Option<ElementKey> {
        self.active.and_then(|index| self.order_tabs.get(index).copied())
    }

    /// Returns the tab control representing `section_id`.
    pub fn tab_for(&self, section_id: &str) -> Option<ElementKey> {
        self.order
            .position(section_id)
            .and_then(|index| self.order_tabs.get(index).copied())
    }

    /// Activates `target`.
    ///
    /// Unknown ids are refused with [`NavError::UnknownSection`] before any
    /// element is touched. Does not touch history or focus.
    pub fn transition(&mut self, document: &mut Document, target: &str) -> NavResult<Transition> {
        let index = self
            .order
            .position(target)
            .ok_or_else(|| NavError::UnknownSection(target.to_string()))?;
        self.apply(document, index)
    }

    /// Handles direct activation of a tab control, e.g. a click.
    pub fn activate_tab(
        &mut self,
        document: &mut Document,
        history: &mut SessionHistory,
        tab: ElementKey,
    ) -> NavResult<Transition> {
        let binding = self
            .tabs
            .iter()
            .find(|binding| binding.key == tab)
            .ok_or(NavError::NotATab)?;
        let Some(target) = binding.target.clone() else {
            return Err(NavError::MissingTarget(self.config.target_attribute.clone()));
        };

        let next = step(&self.order, self.active, &Trigger::Activate(Some(&target)))
            .ok_or(NavError::UnknownSection(target))?;
        self.commit(document, history, next)
    }

    /// Handles a key press.
    ///
    /// Only acts while one of the navigable tabs holds focus. Handled keys
    /// have their default action suppressed even when the tab is already at
    /// the requested end of the list.
    pub fn handle_key(
        &mut self,
        document: &mut Document,
        history: &mut SessionHistory,
        event: &mut KeyboardEvent,
    ) -> NavResult<Option<Transition>> {
        let Some(from) = document
            .active_element()
            .and_then(|focused| self.order_tabs.iter().position(|&tab| tab == focused))
        else {
            return Ok(None);
        };
        let Some(key) = NavKey::from_key(event.key()) else {
            return Ok(None);
        };

        event.prevent_default();
        match step(&self.order, self.active, &Trigger::Key { from, key }) {
            Some(next) => self.commit(document, history, next).map(Some),
            None => Ok(None),
        }
    }

    /// Activates the section named by the current URL fragment, or the first
    /// section when the fragment is missing or unknown.
    ///
    /// Used on startup and for back/forward navigation. Never pushes history.
    pub fn sync_with_location(
        &mut self,
        document: &mut Document,
        history: &SessionHistory,
    ) -> NavResult<Transition> {
        let fragment = history.fragment();
        let fragment = fragment.as_deref();
        let next = step(&self.order, self.active, &Trigger::Location(fragment))
            .ok_or(NavError::NoNavigableSections)?;
        if fragment.is_some_and(|fragment| !self.order.contains(fragment)) {
            debug!(fragment = ?fragment, "Unknown fragment, falling back to first section");
        }
        self.apply(document, next.target)
    }

    fn commit(
        &mut self,
        document: &mut Document,
        history: &mut SessionHistory,
        next: Step,
    ) -> NavResult<Transition> {
        let transition = self.apply(document, next.target)?;
        if next.focus_tab {
            if let Some(tab) = self.active_tab() {
                document.focus(tab)?;
            }
        }
        if next.push_history {
            history.push_fragment(&transition.to);
        }
        Ok(transition)
    }

    fn apply(&mut self, document: &mut Document, index: usize) -> NavResult<Transition> {
        let (Some(target), Some(&active_tab)) = (self.order.get(index), self.order_tabs.get(index))
        else {
            return Err(NavError::NoNavigableSections);
        };
        let target = target.to_string();
        let active_section = self.section_index.get(&target).copied();

        let active_class = self.config.active_class.as_str();
        for tab in &self.tabs {
            let is_active = tab.key == active_tab;
            document.toggle_class(tab.key, active_class, is_active)?;
            document.set_attribute(tab.key, "aria-selected", bool_attr(is_active))?;
            document.set_attribute(tab.key, "tabindex", if is_active { "0" } else { "-1" })?;
        }
        for &section in &self.sections {
            let is_active = Some(section) == active_section;
            document.toggle_class(section, active_class, is_active)?;
            document.set_attribute(section, "aria-hidden", bool_attr(!is_active))?;
        }
        if let Some(content) = self.content {
            document.scroll_into_view(content, self.config.scroll_behavior)?;
        }

        let from = self.active_section().map(str::to_string);
        self.active = Some(index);
        debug!(from = ?from, to = %target, "Section transition");
        Ok(Transition { from, to: target })
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
