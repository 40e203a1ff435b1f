use crate::dom::document::{ACTIVE_CLASS, Document, ElementKey, PAGE_CLASS};
use crate::nav::history::{History, HistoryState, url_for_page};

/// A top-level navigable view.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Page {
    pub id: String,
    pub element: ElementKey,
}

/// The set of pages and the one currently shown.
///
/// The registry is the only writer of the pages' `active` class. Outside of
/// [`PageRegistry::show_page`] exactly one registered page is active (given the home page
/// exists).
#[derive(Clone, Debug)]
pub struct PageRegistry {
    pages: Vec<Page>,
    home: String,
    current: String,
}

impl PageRegistry {
    /// Collect every `.page` element with an id and settle on a single active page.
    ///
    /// If the markup already marks a page active it is adopted as-is (no history entry, extra
    /// active pages are cleared); otherwise the home page is shown.
    pub fn init(doc: &mut Document, home: &str, history: &mut dyn History) -> Self {
        let pages: Vec<Page> = doc
            .elements_by_class(PAGE_CLASS)
            .into_iter()
            .filter_map(|element| {
                let Some(id) = doc.id(element) else {
                    tracing::warn!(?element, "page container without id; not navigable");
                    return None;
                };
                Some(Page {
                    id: id.to_owned(),
                    element,
                })
            })
            .collect();

        let mut registry = Self {
            pages,
            home: home.to_owned(),
            current: home.to_owned(),
        };

        let already_active = registry
            .pages
            .iter()
            .find(|p| doc.has_class(p.element, ACTIVE_CLASS))
            .map(|p| p.id.clone());
        match already_active {
            Some(id) => {
                registry.activate(doc, &id);
            }
            None => {
                registry.show_page(doc, history, home);
            }
        }
        tracing::debug!(pages = registry.pages.len(), current = %registry.current, "page registry ready");
        registry
    }

    /// Show `id`, hide every other page and push a history entry.
    ///
    /// Unknown ids are ignored and leave the current page untouched. Returns whether the
    /// navigation happened.
    #[tracing::instrument(skip(self, doc, history))]
    pub fn show_page(&mut self, doc: &mut Document, history: &mut dyn History, id: &str) -> bool {
        if !self.activate(doc, id) {
            return false;
        }
        history.push_state(HistoryState::page(id), &url_for_page(id, &self.home));
        true
    }

    /// Switch the visible page without touching history (used when replaying history).
    pub(crate) fn activate(&mut self, doc: &mut Document, id: &str) -> bool {
        let Some(target) = self.page(id).map(|p| p.element) else {
            tracing::debug!(page = id, "ignoring navigation to unknown page");
            return false;
        };
        for page in &self.pages {
            if page.element != target {
                doc.remove_class(page.element, ACTIVE_CLASS);
            }
        }
        doc.add_class(target, ACTIVE_CLASS);
        self.current = id.to_owned();
        true
    }

    pub fn current_page(&self) -> &str {
        &self.current
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.page(id).is_some()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Ids of the pages currently carrying the active class.
    pub fn active_pages<'a>(&'a self, doc: &Document) -> Vec<&'a str> {
        self.pages
            .iter()
            .filter(|p| doc.has_class(p.element, ACTIVE_CLASS))
            .map(|p| p.id.as_str())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/registry.rs"]
mod tests;
