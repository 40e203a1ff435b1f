/// Window-level listener list (the `addEventListener('resize', ...)` side of the page).
///
/// Listeners are never removed; owners guard their own attachment so the list stays bounded.
#[derive(Clone, Debug)]
pub struct Listeners<T> {
    entries: Vec<T>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, listener: T) {
        self.entries.push(listener);
    }

    /// Listeners in attachment order, cloned so the caller can mutate while dispatching.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.clone()
    }

    pub fn count_of(&self, listener: &T) -> usize {
        self.entries.iter().filter(|l| *l == listener).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
