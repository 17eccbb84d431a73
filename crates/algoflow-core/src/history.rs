//! Browser-history abstraction.
//!
//! The navigation controller only ever pushes or replaces entries; popping is
//! something the browser does and reports back. [`MemoryHistory`] models the
//! browser's back/forward stacks for tests and headless sessions.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::topic::TopicId;

/// State stored in a history entry: which topic, if any, is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationState {
    pub topic_id: Option<TopicId>,
}

impl NavigationState {
    /// State of the landing page.
    pub fn landing() -> Self {
        Self { topic_id: None }
    }

    /// State of a topic view.
    pub fn topic(id: TopicId) -> Self {
        Self { topic_id: Some(id) }
    }

    /// URL for this state: `#id` for a topic, the bare path for landing.
    pub fn url(&self) -> String {
        match &self.topic_id {
            Some(id) => id.fragment(),
            None => "/".to_string(),
        }
    }
}

/// A state record keyed to its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: NavigationState,
    pub url: String,
}

impl From<NavigationState> for HistoryEntry {
    fn from(state: NavigationState) -> Self {
        let url = state.url();
        Self { state, url }
    }
}

/// Kind of history write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryWrite {
    Push,
    Replace,
}

/// Push/replace sink for navigation entries.
pub trait History: Send {
    /// Add a new entry on top of the current one.
    fn push(&mut self, entry: HistoryEntry);

    /// Overwrite the current entry.
    fn replace(&mut self, entry: HistoryEntry);

    /// The entry the browser is currently on.
    fn current(&self) -> Option<&HistoryEntry>;

    /// Apply a write of the given kind.
    fn write(&mut self, kind: HistoryWrite, entry: HistoryEntry) {
        match kind {
            HistoryWrite::Push => self.push(entry),
            HistoryWrite::Replace => self.replace(entry),
        }
    }
}

/// In-memory history with browser back/forward semantics.
///
/// Only application entries are kept; going back past the first one leaves
/// the application.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    back: Vec<HistoryEntry>,
    current: Option<HistoryEntry>,
    forward: Vec<HistoryEntry>,
    writes: Vec<(HistoryWrite, HistoryEntry)>,
    left_app: bool,
}

impl MemoryHistory {
    /// Empty history, before the first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries strictly behind the current one.
    pub fn back_len(&self) -> usize {
        self.back.len()
    }

    /// Entries the forward button can return to.
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    /// Every write performed, oldest first.
    pub fn writes(&self) -> &[(HistoryWrite, HistoryEntry)] {
        &self.writes
    }

    /// Whether a `back()` has walked off the first application entry.
    pub fn has_left_app(&self) -> bool {
        self.left_app
    }

    /// Browser back button. Returns the state to replay, or `None` when the
    /// browser leaves the application.
    pub fn back(&mut self) -> Option<NavigationState> {
        match self.back.pop() {
            Some(prev) => {
                if let Some(cur) = self.current.replace(prev) {
                    self.forward.push(cur);
                }
                self.current.as_ref().map(|e| e.state.clone())
            }
            None => {
                self.left_app = true;
                None
            }
        }
    }

    /// Browser forward button. Returns the state to replay, if any.
    pub fn forward(&mut self) -> Option<NavigationState> {
        let next = self.forward.pop()?;
        if let Some(cur) = self.current.replace(next) {
            self.back.push(cur);
        }
        self.current.as_ref().map(|e| e.state.clone())
    }
}

impl History for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        trace!(url = %entry.url, "history push");
        self.writes.push((HistoryWrite::Push, entry.clone()));
        if let Some(cur) = self.current.replace(entry) {
            self.back.push(cur);
        }
        self.forward.clear();
    }

    fn replace(&mut self, entry: HistoryEntry) {
        trace!(url = %entry.url, "history replace");
        self.writes.push((HistoryWrite::Replace, entry.clone()));
        self.current = Some(entry);
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.current.as_ref()
    }
}
