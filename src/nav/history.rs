/// State object attached to every navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    pub fn page(id: impl Into<String>) -> Self {
        Self { page: id.into() }
    }
}

/// Session history the router writes to (the `history.pushState` side of the browser API).
pub trait History {
    fn push_state(&mut self, state: HistoryState, url: &str);
}

/// One entry of a [`MemoryHistory`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HistoryEntry {
    pub state: Option<HistoryState>,
    pub url: String,
}

/// In-process session history with browser semantics: pushing truncates forward entries,
/// traversal yields the state of the entry moved to (what a `popstate` event carries).
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single state-less entry at `initial_url`.
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry {
                state: None,
                url: initial_url.into(),
            }],
            index: 0,
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a state-less navigation, as following a `#fragment` link does.
    pub fn navigate(&mut self, url: impl Into<String>) {
        self.push_entry(HistoryEntry {
            state: None,
            url: url.into(),
        });
    }

    /// Move one entry back. `None` when already at the oldest entry; otherwise the popped
    /// state (which itself may be absent).
    pub fn back(&mut self) -> Option<Option<HistoryState>> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current().state.clone())
    }

    /// Move one entry forward; see [`MemoryHistory::back`].
    pub fn forward(&mut self) -> Option<Option<HistoryState>> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current().state.clone())
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry);
        self.index = self.entries.len() - 1;
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn push_state(&mut self, state: HistoryState, url: &str) {
        self.push_entry(HistoryEntry {
            state: Some(state),
            url: url.to_owned(),
        });
    }
}

/// URL recorded for a page: `/` for the home page, `#id` otherwise.
pub fn url_for_page(id: &str, home: &str) -> String {
    if id == home {
        "/".to_owned()
    } else {
        format!("#{id}")
    }
}

/// Fragment of `url` without the leading `#`, if non-empty.
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, frag)| frag)
        .filter(|frag| !frag.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/nav/history.rs"]
mod tests;
