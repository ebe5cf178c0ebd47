//! The document tree.
//!
//! `Document` owns every element in a slot map and exposes the handful of
//! queries and mutations the page enhancements need: lookups by id and class,
//! class and attribute edits, text replacement, child insertion, focus and
//! scroll requests. Each mutation that changes state bumps [`Document::revision`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::element::{Element, ElementBuilder, ElementKey};
use crate::error::{DomError, DomResult};

/// Loading state of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadyState {
    /// The document is still being parsed.
    #[default]
    Loading,
    /// Parsing finished; sub-resources may still be loading.
    Interactive,
    /// Everything has loaded.
    Complete,
}

impl ReadyState {
    /// Returns true once the document content is available.
    #[must_use]
    pub fn is_ready(self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

/// How a scroll request should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Animate the scroll.
    #[default]
    Smooth,
}

/// A recorded scroll-into-view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Element whose start edge should be brought into view.
    pub target: ElementKey,
    /// Requested animation.
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy)]
enum InsertPosition {
    First,
    Last,
}

/// An in-memory document.
#[derive(Debug, Clone)]
pub struct Document {
    elements: SlotMap<ElementKey, Element>,
    root: ElementKey,
    id_index: HashMap<String, ElementKey>,
    ready_state: ReadyState,
    active_element: Option<ElementKey>,
    last_scroll: Option<ScrollRequest>,
    revision: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document whose root is a `body` element.
    #[must_use]
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::new("body"));
        Self {
            elements,
            root,
            id_index: HashMap::new(),
            ready_state: ReadyState::default(),
            active_element: None,
            last_scroll: None,
            revision: 0,
        }
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> ElementKey {
        self.root
    }

    /// Returns the number of elements, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the document holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.len() == 1
    }

    /// Returns a counter that increases on every state-changing mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the current ready state.
    #[must_use]
    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Sets the ready state.
    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Returns the element for `key`, if it exists.
    #[must_use]
    pub fn get(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    /// Returns the element for `key` or an error.
    pub fn element(&self, key: ElementKey) -> DomResult<&Element> {
        self.elements.get(key).ok_or(DomError::UnknownElement(key))
    }

    fn element_mut(&mut self, key: ElementKey) -> DomResult<&mut Element> {
        self.elements
            .get_mut(key)
            .ok_or(DomError::UnknownElement(key))
    }

    /// Appends a subtree as the last child of `parent`.
    pub fn append(&mut self, parent: ElementKey, builder: ElementBuilder) -> DomResult<ElementKey> {
        self.element(parent)?;
        let key = self.insert(parent, builder, InsertPosition::Last);
        self.revision += 1;
        Ok(key)
    }

    /// Inserts a subtree as the first child of `parent`.
    pub fn insert_first_child(
        &mut self,
        parent: ElementKey,
        builder: ElementBuilder,
    ) -> DomResult<ElementKey> {
        self.element(parent)?;
        let key = self.insert(parent, builder, InsertPosition::First);
        self.revision += 1;
        Ok(key)
    }

    fn insert(
        &mut self,
        parent: ElementKey,
        builder: ElementBuilder,
        position: InsertPosition,
    ) -> ElementKey {
        let (mut element, children) = builder.into_parts();
        element.parent = Some(parent);
        let id = element.id.clone();
        let key = self.elements.insert(element);

        if let Some(id) = id.filter(|id| !id.is_empty()) {
            self.id_index.entry(id).or_insert(key);
        }

        if let Some(parent) = self.elements.get_mut(parent) {
            match position {
                InsertPosition::First => parent.children.insert(0, key),
                InsertPosition::Last => parent.children.push(key),
            }
        }

        for child in children {
            self.insert(key, child, InsertPosition::Last);
        }
        key
    }

    /// Returns the first element registered with the given id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<ElementKey> {
        self.id_index.get(id).copied()
    }

    /// Returns every descendant of `key` in document (pre-)order.
    #[must_use]
    pub fn descendants(&self, key: ElementKey) -> Vec<ElementKey> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementKey> = match self.elements.get(key) {
            Some(element) => element.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(element) = self.elements.get(current) {
                stack.extend(element.children.iter().rev().copied());
            }
        }
        out
    }

    /// Returns every element carrying `class`, in document order.
    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementKey> {
        self.descendants(self.root)
            .into_iter()
            .filter(|&key| self.has_class(key, class))
            .collect()
    }

    /// Returns the first descendant of `ancestor` carrying `class`.
    #[must_use]
    pub fn find_descendant_by_class(&self, ancestor: ElementKey, class: &str) -> Option<ElementKey> {
        self.descendants(ancestor)
            .into_iter()
            .find(|&key| self.has_class(key, class))
    }

    /// Returns true if `key` exists and carries `class`.
    #[must_use]
    pub fn has_class(&self, key: ElementKey, class: &str) -> bool {
        self.elements
            .get(key)
            .is_some_and(|element| element.has_class(class))
    }

    /// Returns an attribute value of `key`.
    #[must_use]
    pub fn attribute(&self, key: ElementKey, name: &str) -> Option<&str> {
        self.elements
            .get(key)
            .and_then(|element| element.attribute(name))
    }

    /// Concatenates the text of `key` and all of its descendants.
    #[must_use]
    pub fn text_content(&self, key: ElementKey) -> String {
        let mut out = String::new();
        if let Some(element) = self.elements.get(key) {
            out.push_str(&element.text);
        }
        for descendant in self.descendants(key) {
            if let Some(element) = self.elements.get(descendant) {
                out.push_str(&element.text);
            }
        }
        out
    }

    /// Adds a class. Returns true if the class list changed.
    pub fn add_class(&mut self, key: ElementKey, class: &str) -> DomResult<bool> {
        let element = self.element_mut(key)?;
        if element.has_class(class) {
            return Ok(false);
        }
        element.classes.push(class.to_string());
        self.revision += 1;
        Ok(true)
    }

    /// Removes a class. Returns true if the class list changed.
    pub fn remove_class(&mut self, key: ElementKey, class: &str) -> DomResult<bool> {
        let element = self.element_mut(key)?;
        let before = element.classes.len();
        element.classes.retain(|c| c != class);
        let changed = element.classes.len() != before;
        if changed {
            self.revision += 1;
        }
        Ok(changed)
    }

    /// Adds `class` when `force` is true, removes it otherwise.
    pub fn toggle_class(&mut self, key: ElementKey, class: &str, force: bool) -> DomResult<bool> {
        if force {
            self.add_class(key, class)
        } else {
            self.remove_class(key, class)
        }
    }

    /// Sets an attribute. Returns true if the value changed.
    pub fn set_attribute(&mut self, key: ElementKey, name: &str, value: &str) -> DomResult<bool> {
        let element = self.element_mut(key)?;
        if element.attribute(name) == Some(value) {
            return Ok(false);
        }
        element
            .attributes
            .insert(name.to_string(), value.to_string());
        self.revision += 1;
        Ok(true)
    }

    /// Replaces the element's own text. Returns true if it changed.
    pub fn set_text(&mut self, key: ElementKey, text: &str) -> DomResult<bool> {
        let element = self.element_mut(key)?;
        if element.text == text {
            return Ok(false);
        }
        element.text = text.to_string();
        self.revision += 1;
        Ok(true)
    }

    /// Moves input focus to `key`.
    pub fn focus(&mut self, key: ElementKey) -> DomResult<()> {
        self.element(key)?;
        self.active_element = Some(key);
        Ok(())
    }

    /// Clears input focus.
    pub fn blur(&mut self) -> Option<ElementKey> {
        self.active_element.take()
    }

    /// Returns the element holding input focus.
    #[must_use]
    pub fn active_element(&self) -> Option<ElementKey> {
        self.active_element
    }

    /// Returns true if `key` holds input focus.
    #[must_use]
    pub fn has_focus(&self, key: ElementKey) -> bool {
        self.active_element == Some(key)
    }

    /// Requests that `key` be scrolled into view.
    pub fn scroll_into_view(&mut self, key: ElementKey, behavior: ScrollBehavior) -> DomResult<()> {
        self.element(key)?;
        self.last_scroll = Some(ScrollRequest {
            target: key,
            behavior,
        });
        Ok(())
    }

    /// Returns the most recent scroll request.
    #[must_use]
    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.last_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn section(id: &str) -> ElementBuilder {
        ElementBuilder::new("section")
            .id(id)
            .class("feature-section")
            .child(ElementBuilder::new("h2").text(id.to_uppercase()))
            .child(ElementBuilder::new("div").class("demo-container"))
    }

    #[test]
    fn test_append_and_lookup() {
        let mut doc = Document::new();
        let root = doc.root();
        let a = doc.append(root, section("alpha")).unwrap();
        let b = doc.append(root, section("beta")).unwrap();

        assert_eq!(doc.element_by_id("alpha"), Some(a));
        assert_eq!(doc.element_by_id("beta"), Some(b));
        assert_eq!(doc.element_by_id("gamma"), None);
        assert_eq!(doc.elements_by_class("feature-section"), vec![a, b]);
        assert_eq!(doc.len(), 7);
    }

    #[test]
    fn test_document_order_is_preorder() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc
            .append(
                root,
                ElementBuilder::new("div")
                    .class("x")
                    .child(ElementBuilder::new("span").class("x")),
            )
            .unwrap();
        let sibling = doc.append(root, ElementBuilder::new("p").class("x")).unwrap();

        let found = doc.elements_by_class("x");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0], outer);
        assert_eq!(doc.get(found[1]).unwrap().tag(), "span");
        assert_eq!(found[2], sibling);
    }

    #[test]
    fn test_insert_first_child() {
        let mut doc = Document::new();
        let root = doc.root();
        let alpha = doc.append(root, section("alpha")).unwrap();
        let container = doc.find_descendant_by_class(alpha, "demo-container").unwrap();
        doc.append(container, ElementBuilder::new("p").text("demo"))
            .unwrap();

        let notice = doc
            .insert_first_child(container, ElementBuilder::new("div").class("notice"))
            .unwrap();

        assert_eq!(doc.get(container).unwrap().children()[0], notice);
        assert_eq!(doc.get(notice).unwrap().parent(), Some(container));
    }

    #[test]
    fn test_revision_tracks_real_changes_only() {
        let mut doc = Document::new();
        let root = doc.root();
        let alpha = doc.append(root, section("alpha")).unwrap();
        let start = doc.revision();

        assert!(doc.add_class(alpha, "active").unwrap());
        assert!(!doc.add_class(alpha, "active").unwrap());
        assert!(doc.set_attribute(alpha, "aria-hidden", "false").unwrap());
        assert!(!doc.set_attribute(alpha, "aria-hidden", "false").unwrap());
        assert!(doc.toggle_class(alpha, "active", false).unwrap());
        assert!(!doc.remove_class(alpha, "active").unwrap());
        assert_eq!(doc.revision(), start + 3);

        doc.focus(alpha).unwrap();
        assert_eq!(doc.revision(), start + 3);
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let mut doc = Document::new();
        let root = doc.root();
        let alpha = doc.append(root, section("alpha")).unwrap();
        assert_eq!(doc.text_content(alpha), "ALPHA");

        let heading = doc.get(alpha).unwrap().children()[0];
        doc.set_text(heading, "Renamed").unwrap();
        assert_eq!(doc.text_content(alpha), "Renamed");
    }

    #[test]
    fn test_stale_key_is_an_error() {
        let mut doc = Document::new();
        let root = doc.root();
        let stale = ElementKey::default();

        assert!(doc.get(stale).is_none());
        assert_eq!(
            doc.add_class(stale, "a"),
            Err(DomError::UnknownElement(stale))
        );
        assert!(doc.append(stale, section("x")).is_err());

        assert!(doc.focus(root).is_ok());
        assert!(doc.has_focus(root));
        assert_eq!(doc.blur(), Some(root));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_scroll_request_is_recorded() {
        let mut doc = Document::new();
        let root = doc.root();
        let main = doc
            .append(root, ElementBuilder::new("main").class("main-content"))
            .unwrap();

        assert_eq!(doc.last_scroll(), None);
        doc.scroll_into_view(main, ScrollBehavior::Smooth).unwrap();
        assert_eq!(
            doc.last_scroll(),
            Some(ScrollRequest {
                target: main,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_ready_state() {
        let mut doc = Document::new();
        assert_eq!(doc.ready_state(), ReadyState::Loading);
        assert!(!doc.ready_state().is_ready());
        doc.set_ready_state(ReadyState::Interactive);
        assert!(doc.ready_state().is_ready());
    }
}
