//! Elements and element builders.

use indexmap::IndexMap;
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// A key identifying an element in a [`Document`](crate::Document).
    pub struct ElementKey;
}

/// Class list storage. Most showcase elements carry one to three classes.
pub type ClassList = SmallVec<[String; 4]>;

/// A single element node.
///
/// Fields are read through accessors; all mutation goes through the owning
/// [`Document`](crate::Document) so that its revision counter stays accurate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: ClassList,
    pub(crate) attributes: IndexMap<String, String>,
    pub(crate) text: String,
    pub(crate) parent: Option<ElementKey>,
    pub(crate) children: Vec<ElementKey>,
}

impl Element {
    pub(crate) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: ClassList::new(),
            attributes: IndexMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the element id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the classes in authored order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the element's own text (not including descendants).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parent element.
    #[must_use]
    pub fn parent(&self) -> Option<ElementKey> {
        self.parent
    }

    /// Returns the child elements in order.
    #[must_use]
    pub fn children(&self) -> &[ElementKey] {
        &self.children
    }
}

/// Fluent builder for element subtrees.
///
/// ```
/// use showcase_dom::{Document, ElementBuilder};
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// let section = doc
///     .append(
///         root,
///         ElementBuilder::new("section")
///             .id("carousel")
///             .class("feature-section")
///             .child(ElementBuilder::new("span").class("support-badge").text("Good Support")),
///     )
///     .unwrap();
///
/// assert_eq!(doc.element_by_id("carousel"), Some(section));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementBuilder {
    tag: String,
    id: Option<String>,
    classes: ClassList,
    attributes: IndexMap<String, String>,
    text: String,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    /// Starts a builder for an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class. Duplicates are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Sets an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the element's own text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child subtree.
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child subtrees.
    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }

    /// Splits the builder into the detached element and its child builders.
    pub(crate) fn into_parts(self) -> (Element, Vec<ElementBuilder>) {
        let mut element = Element::new(self.tag);
        element.id = self.id;
        element.classes = self.classes;
        element.attributes = self.attributes;
        element.text = self.text;
        (element, self.children)
    }
}
