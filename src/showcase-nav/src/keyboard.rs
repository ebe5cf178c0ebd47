//! Keyboard input for the tab list.

use std::fmt;

/// A key, named the way DOM `KeyboardEvent.key` names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// `Tab`.
    Tab,
    /// `Enter`.
    Enter,
    /// `Escape`.
    Escape,
    /// A printable character.
    Char(char),
    /// Any other named key.
    Other(String),
}

impl Key {
    /// Parses a DOM key name.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other(other.to_string()),
                }
            }
        }
    }

    /// Returns the DOM key name.
    pub fn name(&self) -> String {
        match self {
            Key::ArrowLeft => "ArrowLeft".to_string(),
            Key::ArrowRight => "ArrowRight".to_string(),
            Key::ArrowUp => "ArrowUp".to_string(),
            Key::ArrowDown => "ArrowDown".to_string(),
            Key::Home => "Home".to_string(),
            Key::End => "End".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Escape => "Escape".to_string(),
            Key::Char(c) => c.to_string(),
            Key::Other(name) => name.clone(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_dom(name)
    }
}

/// A movement within the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Previous tab, wrapping to the last.
    Previous,
    /// Next tab, wrapping to the first.
    Next,
    /// First tab.
    First,
    /// Last tab.
    Last,
}

impl NavKey {
    /// Maps a key to a tab-list movement. Unhandled keys map to `None`.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowLeft | Key::ArrowUp => Some(NavKey::Previous),
            Key::ArrowRight | Key::ArrowDown => Some(NavKey::Next),
            Key::Home => Some(NavKey::First),
            Key::End => Some(NavKey::Last),
            _ => None,
        }
    }
}

/// A key press delivered to the page, with default-action control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    key: Key,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// Creates a key press event.
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    /// Returns the pressed key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Suppresses the browser's default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true if the default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<Key> for KeyboardEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_names_round_trip() {
        for name in ["ArrowLeft", "ArrowDown", "Home", "End", "Escape", "a", "F5"] {
            assert_eq!(Key::from_dom(name).name(), name);
        }
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom("PageDown"), Key::Other("PageDown".into()));
    }

    #[test]
    fn test_nav_key_mapping() {
        assert_eq!(NavKey::from_key(&Key::ArrowLeft), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key(&Key::ArrowUp), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key(&Key::ArrowRight), Some(NavKey::Next));
        assert_eq!(NavKey::from_key(&Key::ArrowDown), Some(NavKey::Next));
        assert_eq!(NavKey::from_key(&Key::Home), Some(NavKey::First));
        assert_eq!(NavKey::from_key(&Key::End), Some(NavKey::Last));
        assert_eq!(NavKey::from_key(&Key::Tab), None);
        assert_eq!(NavKey::from_key(&Key::Char('j')), None);
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyboardEvent::new("End");
        assert_eq!(event.key(), &Key::End);
        assert!(!event.is_default_prevented());
        event.prevent_default();
        assert!(event.is_default_prevented());
    }
}
