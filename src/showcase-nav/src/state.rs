//! The navigation state machine.
//!
//! [`step`] maps the current state and a trigger to the next state without
//! touching the document, so every transition rule can be tested directly.
//! [`TabNavigator`](crate::TabNavigator) applies the resulting [`Step`].

use crate::keyboard::NavKey;

/// Navigable section ids in tab order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabOrder {
    ids: Vec<String>,
}

impl TabOrder {
    /// Creates an order from ids. Later duplicates are dropped.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Self::default();
        for id in ids {
            let id = id.into();
            if !order.ids.contains(&id) {
                order.ids.push(id);
            }
        }
        order
    }

    /// Returns the index of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }

    /// Returns the id at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Returns true if `id` is navigable.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Returns the number of navigable sections.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is navigable.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates ids in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// An external input to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger<'a> {
    /// A tab was activated directly. Carries the tab's bound id, if it has one.
    Activate(Option<&'a str>),
    /// A navigation key was pressed while the tab at `from` had focus.
    Key {
        /// Index of the focused tab.
        from: usize,
        /// The movement.
        key: NavKey,
    },
    /// The page loaded, or the user moved through session history.
    /// Carries the current URL fragment.
    Location(Option<&'a str>),
}

/// The result of an accepted trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index of the section to activate.
    pub target: usize,
    /// Whether a history entry should be pushed for the new section.
    pub push_history: bool,
    /// Whether input focus should move to the new tab.
    pub focus_tab: bool,
}

/// Computes the next state.
///
/// `current` is the active index, or `None` before the first transition.
/// Returns `None` when the trigger is refused and the state must not change:
/// an unknown or missing id, a key press before initialisation, or a key that
/// would land on the tab it started from.
pub fn step(order: &TabOrder, current: Option<usize>, trigger: &Trigger<'_>) -> Option<Step> {
    match *trigger {
        Trigger::Activate(target) => {
            let target = order.position(target?)?;
            Some(Step {
                target,
                push_history: true,
                focus_tab: false,
            })
        }
        Trigger::Key { from, key } => {
            current?;
            if from >= order.len() {
                return None;
            }
            let last = order.len() - 1;
            let target = match key {
                NavKey::Previous if from == 0 => last,
                NavKey::Previous => from - 1,
                NavKey::Next if from == last => 0,
                NavKey::Next => from + 1,
                NavKey::First => 0,
                NavKey::Last => last,
            };
            (target != from).then_some(Step {
                target,
                push_history: true,
                focus_tab: true,
            })
        }
        Trigger::Location(fragment) => {
            let target = fragment
                .and_then(|fragment| order.position(fragment))
                .or_else(|| (!order.is_empty()).then_some(0))?;
            Some(Step {
                target,
                push_history: false,
                focus_tab: false,
            })
        }
    }
}
