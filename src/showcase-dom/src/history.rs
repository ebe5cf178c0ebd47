//! Session history and the current URL fragment.

use std::borrow::Cow;

use url::Url;

use crate::error::DomResult;

/// The browsing session's history stack.
///
/// Mirrors the subset of `window.history` and `window.location` the page
/// uses: pushing a new entry that differs only by fragment, moving back and
/// forward, and reading the current fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<Url>,
    position: usize,
}

impl SessionHistory {
    /// Starts a session at `url`.
    pub fn from_url(url: &str) -> DomResult<Self> {
        Ok(Self {
            entries: vec![Url::parse(url)?],
            position: 0,
        })
    }

    /// Returns the URL of the current entry.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.entries[self.position]
    }

    /// Returns the current fragment without the leading `#`, percent-decoded.
    ///
    /// An empty fragment (`page.html#`) is reported as `None`. A fragment
    /// that does not decode to UTF-8 is returned as written.
    #[must_use]
    pub fn fragment(&self) -> Option<Cow<'_, str>> {
        let raw = self.url().fragment().filter(|f| !f.is_empty())?;
        Some(urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
    }

    /// Pushes a new entry that differs from the current one only by fragment.
    ///
    /// Entries after the current position are discarded.
    pub fn push_fragment(&mut self, fragment: &str) {
        let mut next = self.url().clone();
        next.set_fragment(Some(fragment));
        self.entries.truncate(self.position + 1);
        self.entries.push(next);
        self.position += 1;
    }

    /// Moves one entry back. Returns false at the start of the session.
    pub fn back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    /// Moves one entry forward. Returns false at the end of the session.
    pub fn forward(&mut self) -> bool {
        if self.position + 1 >= self.entries.len() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a session has at least its initial entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the current entry.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}
