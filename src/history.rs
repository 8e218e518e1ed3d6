//! Session history: the stack of URLs behind back/forward.
//!
//! Mirrors the browser's `history` object closely enough for the router:
//! `push_state` drops any forward entries, `replace_state` swaps the current
//! entry in place, and `back`/`forward` move the cursor and report whether a
//! pop event fired.
//!
//! Like the browser API, `push_state` and `replace_state` refuse a URL whose
//! origin differs from the current entry's; the session never leaves its
//! origin.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("{url} is not same-origin with {current}")]
    CrossOrigin { url: String, current: String },
}

#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: Vec<Url>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The current document URL.
    pub fn location(&self) -> &Url {
        &self.entries[self.index]
    }

    /// Resolve an href against the current location.
    pub fn resolve(&self, href: &str) -> Result<Url, url::ParseError> {
        self.location().join(href)
    }

    /// Add a new entry after the current one, discarding forward history.
    pub fn push_state(&mut self, url: Url) -> Result<(), HistoryError> {
        self.check_origin(&url)?;
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index += 1;
        Ok(())
    }

    /// Replace the current entry without adding one.
    pub fn replace_state(&mut self, url: Url) -> Result<(), HistoryError> {
        self.check_origin(&url)?;
        self.entries[self.index] = url;
        Ok(())
    }

    fn check_origin(&self, url: &Url) -> Result<(), HistoryError> {
        let current = self.location();
        if url.origin() != current.origin() {
            return Err(HistoryError::CrossOrigin {
                url: url.to_string(),
                current: current.to_string(),
            });
        }
        Ok(())
    }

    /// Step back one entry. Returns `false` at the oldest entry (no pop event).
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Number of entries in the session.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }
}
