//! Navigation state: the history stack and saved scroll positions
//!
//! Entries are kept oldest first with a cursor pointing at the current one.
//! Pushing discards everything after the cursor, the same way a browser
//! drops forward history when a new page is visited.

use super::scroll::ScrollPosition;

/// Default history limit
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Unique identifier of a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// One visited location
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: EntryId,
    /// Normalized logical path of the view shown for this entry
    pub path: String,
    /// Name of the matched route
    pub name: Option<String>,
    /// Scroll offset recorded while this entry was current
    pub saved_scroll: Option<ScrollPosition>,
}

/// History stack owned by a router
#[derive(Debug, Clone)]
pub struct NavigationState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    next_id: u64,
    max_history: usize,
}

impl NavigationState {
    /// Create a new state holding a single entry for the initial location
    pub fn new(path: impl Into<String>, name: Option<String>, max_history: usize) -> Self {
        let mut state = Self {
            entries: Vec::new(),
            cursor: 0,
            next_id: 0,
            max_history: max_history.max(1),
        };
        let entry = state.entry(path.into(), name);
        state.entries.push(entry);
        state
    }

    /// The current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Add a new entry after the current one, dropping forward history
    pub fn push(&mut self, path: impl Into<String>, name: Option<String>) -> &HistoryEntry {
        let entry = self.entry(path.into(), name);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);

        if self.entries.len() > self.max_history {
            let excess = self.entries.len() - self.max_history;
            self.entries.drain(..excess);
        }

        self.cursor = self.entries.len() - 1;
        self.current()
    }

    /// Overwrite the current entry
    pub fn replace(&mut self, path: impl Into<String>, name: Option<String>) -> &HistoryEntry {
        let entry = self.entry(path.into(), name);
        self.entries[self.cursor] = entry;
        self.current()
    }

    /// Move the cursor by `delta` entries. Out-of-range moves, and a zero
    /// delta, leave the state untouched and return `None`.
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        if delta == 0 {
            return None;
        }
        let index = self.offset(delta)?;
        self.cursor = index;
        Some(self.current())
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    /// Record the scroll offset of the current entry
    pub fn save_scroll(&mut self, position: ScrollPosition) {
        self.entries[self.cursor].saved_scroll = Some(position);
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the current entry within [`Self::entries`]
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    fn offset(&self, delta: isize) -> Option<usize> {
        let index = self.cursor.checked_add_signed(delta)?;
        (index < self.entries.len()).then_some(index)
    }

    fn entry(&mut self, path: String, name: Option<String>) -> HistoryEntry {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        HistoryEntry {
            id,
            path,
            name,
            saved_scroll: None,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new("/", None, DEFAULT_MAX_HISTORY)
    }
}
