use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Handle to a scheduled callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TimerId(u64);

/// Deferred callbacks on a virtual millisecond clock (`setTimeout` without the wall clock).
///
/// Determinism rule: timers due at the same instant fire in scheduling order.
#[derive(Clone, Debug)]
pub struct Timers<T> {
    now_ms: u64,
    next_id: u64,
    queue: BinaryHeap<Reverse<(u64, u64)>>,
    pending: BTreeMap<u64, T>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            queue: BinaryHeap::new(),
            pending: BTreeMap::new(),
        }
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `payload` `delay_ms` after the current instant.
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.push(Reverse((due, id)));
        self.pending.insert(id, payload);
        tracing::trace!(id, due, "timer scheduled");
        TimerId(id)
    }

    /// Drop a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.pending.remove(&id.0).is_some()
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to its due time.
    ///
    /// Callers loop on this so that timers scheduled by a firing timer are seen in the same pass.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        while let Some(&Reverse((due, id))) = self.queue.peek() {
            if due > until_ms {
                return None;
            }
            self.queue.pop();
            if let Some(payload) = self.pending.remove(&id) {
                self.now_ms = self.now_ms.max(due);
                return Some(payload);
            }
        }
        None
    }

    /// Move the clock forward without firing anything; never moves it backwards.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timers.rs"]
mod tests;
