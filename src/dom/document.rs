use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::foundation::core::Size;
use crate::foundation::error::{SketchError, SketchResult};

/// Class that marks navigable page containers.
pub const PAGE_CLASS: &str = "page";
/// Class toggled on the single visible page (and on an open popup).
pub const ACTIVE_CLASS: &str = "active";

/// Stable handle to an element in a [`Document`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementKey(pub u32);

#[derive(Clone, Debug)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    parent: Option<ElementKey>,
    children: Vec<ElementKey>,
    size: Size,
    hidden: bool,
}

/// One attribute change, in the spirit of a DOM mutation record.
///
/// Class changes are reported with `attribute == "class"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    pub target: ElementKey,
    pub attribute: String,
}

/// In-process element tree standing in for the browser DOM and its layout.
///
/// Elements are never removed from the arena; [`Document::clear_children`] only detaches them.
/// Every class/attribute write queues a [`MutationRecord`] that observers collect with
/// [`Document::take_mutations`].
#[derive(Clone, Debug)]
pub struct Document {
    elements: Vec<Element>,
    by_id: HashMap<String, ElementKey>,
    body: ElementKey,
    mutations: Vec<MutationRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body", None, None)],
            by_id: HashMap::new(),
            body: ElementKey(0),
            mutations: Vec::new(),
        }
    }

    pub fn body(&self) -> ElementKey {
        self.body
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a new element under `parent`. Ids must be unique within the document.
    pub fn create_element(
        &mut self,
        tag: &str,
        id: Option<&str>,
        parent: ElementKey,
    ) -> SketchResult<ElementKey> {
        if self.get(parent).is_none() {
            return Err(SketchError::validation(format!(
                "parent element {parent:?} does not exist"
            )));
        }
        if let Some(id) = id {
            if id.is_empty() {
                return Err(SketchError::validation("element id must be non-empty"));
            }
            if self.by_id.contains_key(id) {
                return Err(SketchError::validation(format!(
                    "duplicate element id '{id}'"
                )));
            }
        }

        let key = ElementKey(
            self.elements
                .len()
                .try_into()
                .map_err(|_| SketchError::validation("element arena overflow"))?,
        );
        self.elements
            .push(Element::new(tag, id.map(str::to_owned), Some(parent)));
        self.elements[parent.0 as usize].children.push(key);
        if let Some(id) = id {
            self.by_id.insert(id.to_owned(), key);
        }
        Ok(key)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementKey> {
        self.by_id.get(id).copied()
    }

    pub fn id(&self, key: ElementKey) -> Option<&str> {
        self.get(key).and_then(|e| e.id.as_deref())
    }

    pub fn tag(&self, key: ElementKey) -> Option<&str> {
        self.get(key).map(|e| e.tag.as_str())
    }

    /// Attached elements carrying `class`, in document (creation) order.
    pub fn elements_by_class(&self, class: &str) -> Vec<ElementKey> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.contains(class))
            .map(|(i, _)| ElementKey(i as u32))
            .filter(|&k| self.is_attached(k))
            .collect()
    }

    pub fn has_class(&self, key: ElementKey, class: &str) -> bool {
        self.get(key).is_some_and(|e| e.classes.contains(class))
    }

    /// Add `class`; returns `true` when the class list changed.
    pub fn add_class(&mut self, key: ElementKey, class: &str) -> bool {
        let Some(el) = self.get_mut(key) else {
            return false;
        };
        let changed = el.classes.insert(class.to_owned());
        if changed {
            self.record(key, "class");
        }
        changed
    }

    /// Remove `class`; returns `true` when the class list changed.
    pub fn remove_class(&mut self, key: ElementKey, class: &str) -> bool {
        let Some(el) = self.get_mut(key) else {
            return false;
        };
        let changed = el.classes.remove(class);
        if changed {
            self.record(key, "class");
        }
        changed
    }

    pub fn attribute(&self, key: ElementKey, name: &str) -> Option<&str> {
        self.get(key)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// Set an attribute. A record is queued even when the value is unchanged, as the DOM does.
    pub fn set_attribute(&mut self, key: ElementKey, name: &str, value: &str) {
        let Some(el) = self.get_mut(key) else {
            return;
        };
        el.attrs.insert(name.to_owned(), value.to_owned());
        self.record(key, name);
    }

    pub fn text(&self, key: ElementKey) -> Option<&str> {
        self.get(key).and_then(|e| e.text.as_deref())
    }

    pub fn set_text(&mut self, key: ElementKey, text: &str) {
        if let Some(el) = self.get_mut(key) {
            el.text = Some(text.to_owned());
        }
    }

    pub fn parent(&self, key: ElementKey) -> Option<ElementKey> {
        self.get(key).and_then(|e| e.parent)
    }

    pub fn children(&self, key: ElementKey) -> &[ElementKey] {
        self.get(key).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Detach all children of `key` (the `innerHTML = ''` idiom). Their ids become free again.
    pub fn clear_children(&mut self, key: ElementKey) {
        let Some(el) = self.get_mut(key) else {
            return;
        };
        let detached = std::mem::take(&mut el.children);
        let mut stack = detached.clone();
        while let Some(k) = stack.pop() {
            if let Some(id) = self.elements[k.0 as usize].id.take() {
                self.by_id.remove(&id);
            }
            stack.extend(self.elements[k.0 as usize].children.iter().copied());
        }
        for k in detached {
            self.elements[k.0 as usize].parent = None;
        }
    }

    pub fn first_child_with_tag(&self, key: ElementKey, tag: &str) -> Option<ElementKey> {
        self.children(key)
            .iter()
            .copied()
            .find(|&c| self.tag(c) == Some(tag))
    }

    /// True when `node` is `ancestor` or lies beneath it.
    pub fn contains(&self, ancestor: ElementKey, node: ElementKey) -> bool {
        self.ancestors(node).any(|k| k == ancestor)
    }

    /// Nearest element at or above `key` carrying attribute `name`.
    pub fn closest_with_attribute(&self, key: ElementKey, name: &str) -> Option<(ElementKey, &str)> {
        self.ancestors(key)
            .find_map(|k| self.attribute(k, name).map(|v| (k, v)))
    }

    /// Nearest element at or above `key` carrying `class`.
    pub fn closest_with_class(&self, key: ElementKey, class: &str) -> Option<ElementKey> {
        self.ancestors(key).find(|&k| self.has_class(k, class))
    }

    /// Set the laid-out size of an element (what the layout engine would compute).
    pub fn set_layout_size(&mut self, key: ElementKey, size: Size) {
        if let Some(el) = self.get_mut(key) {
            el.size = size;
        }
    }

    /// `display: none` toggle.
    pub fn set_hidden(&mut self, key: ElementKey, hidden: bool) {
        if let Some(el) = self.get_mut(key) {
            el.hidden = hidden;
        }
    }

    /// Whether the element participates in layout.
    ///
    /// An element is not rendered when it or any ancestor is hidden, detached, or is a page
    /// without the active class (pages are `display: none` unless active).
    pub fn is_rendered(&self, key: ElementKey) -> bool {
        if !self.is_attached(key) {
            return false;
        }
        self.ancestors(key).all(|k| {
            let el = &self.elements[k.0 as usize];
            !el.hidden && !(el.classes.contains(PAGE_CLASS) && !el.classes.contains(ACTIVE_CLASS))
        })
    }

    /// Current layout box of `key`; zero when the element is not rendered.
    pub fn bounding_box(&self, key: ElementKey) -> Size {
        if !self.is_rendered(key) {
            return Size::ZERO;
        }
        self.get(key).map(|e| e.size).unwrap_or(Size::ZERO)
    }

    pub fn has_pending_mutations(&self) -> bool {
        !self.mutations.is_empty()
    }

    /// Drain the queued mutation records.
    pub fn take_mutations(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.mutations)
    }

    fn ancestors(&self, key: ElementKey) -> impl Iterator<Item = ElementKey> + '_ {
        let start = self.get(key).map(|_| key);
        std::iter::successors(start, |&k| self.parent(k))
    }

    fn is_attached(&self, key: ElementKey) -> bool {
        self.ancestors(key).last() == Some(self.body)
    }

    fn record(&mut self, target: ElementKey, attribute: &str) {
        self.mutations.push(MutationRecord {
            target,
            attribute: attribute.to_owned(),
        });
    }

    fn get(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key.0 as usize)
    }

    fn get_mut(&mut self, key: ElementKey) -> Option<&mut Element> {
        self.elements.get_mut(key.0 as usize)
    }
}

impl Element {
    fn new(tag: &str, id: Option<String>, parent: Option<ElementKey>) -> Self {
        Self {
            tag: tag.to_owned(),
            id,
            classes: BTreeSet::new(),
            attrs: BTreeMap::new(),
            text: None,
            parent,
            children: Vec::new(),
            size: Size::ZERO,
            hidden: false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
