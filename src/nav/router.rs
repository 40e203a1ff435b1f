use crate::dom::document::{Document, ElementKey};
use crate::nav::history::{HistoryState, MemoryHistory};
use crate::nav::registry::PageRegistry;

/// Attribute carried by navigation controls.
pub const NAV_TARGET_ATTR: &str = "data-page";
/// Attribute carried by back controls.
pub const BACK_TARGET_ATTR: &str = "data-back";

/// Page registry wired to session history and to the document's navigation controls.
///
/// Pop-state and hash-change signals switch the visible page without pushing a new entry: the
/// browser has already moved to that entry, so replaying them through `show_page` would
/// duplicate it.
#[derive(Clone, Debug)]
pub struct Router {
    registry: PageRegistry,
    history: MemoryHistory,
}

impl Router {
    pub fn new(doc: &mut Document, home: &str, mut history: MemoryHistory) -> Self {
        let registry = PageRegistry::init(doc, home, &mut history);
        Self { registry, history }
    }

    pub fn show_page(&mut self, doc: &mut Document, id: &str) -> bool {
        self.registry.show_page(doc, &mut self.history, id)
    }

    /// Replay a `popstate`: show the embedded page, or home when the entry carries no state.
    ///
    /// The browser has already moved to the popped entry, so nothing is pushed.
    pub fn handle_pop_state(&mut self, doc: &mut Document, state: Option<&HistoryState>) -> bool {
        let target = state
            .map(|s| s.page.clone())
            .unwrap_or_else(|| self.registry.home().to_owned());
        self.registry.activate(doc, &target)
    }

    /// React to a fragment change (`#about`). Empty or unknown fragments are ignored.
    pub fn handle_hash_change(&mut self, doc: &mut Document, fragment: &str) -> bool {
        let id = fragment.trim_start_matches('#');
        if id.is_empty() || !self.registry.contains(id) {
            tracing::debug!(fragment, "hash does not name a page");
            return false;
        }
        self.registry.activate(doc, id)
    }

    /// Route a click on `target`: the nearest navigation or back control above it decides the
    /// page to show. Clicks elsewhere are not handled.
    pub fn handle_click(&mut self, doc: &mut Document, target: ElementKey) -> bool {
        let mut cursor = Some(target);
        while let Some(key) = cursor {
            let page = [NAV_TARGET_ATTR, BACK_TARGET_ATTR]
                .iter()
                .find_map(|attr| doc.attribute(key, attr))
                .map(str::to_owned);
            if let Some(page) = page {
                return !page.is_empty() && self.show_page(doc, &page);
            }
            cursor = doc.parent(key);
        }
        false
    }

    /// Browser back button.
    pub fn back(&mut self, doc: &mut Document) -> bool {
        match self.history.back() {
            Some(state) => self.handle_pop_state(doc, state.as_ref()),
            None => false,
        }
    }

    /// Browser forward button.
    pub fn forward(&mut self, doc: &mut Document) -> bool {
        match self.history.forward() {
            Some(state) => self.handle_pop_state(doc, state.as_ref()),
            None => false,
        }
    }

    /// Follow a `#fragment` link: record a state-less entry, then handle the hash change.
    pub fn follow_fragment(&mut self, doc: &mut Document, fragment: &str) -> bool {
        let id = fragment.trim_start_matches('#');
        self.history.navigate(format!("/#{id}"));
        self.handle_hash_change(doc, id)
    }

    pub fn current_page(&self) -> &str {
        self.registry.current_page()
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn history(&self) -> &MemoryHistory {
        &self.history
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/router.rs"]
mod tests;
