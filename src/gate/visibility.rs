//! Visibility gates: "wait until this condition holds, then tell me".
//!
//! A gate binds a target element to a [`Condition`] and a payload. Gates are re-evaluated only
//! when a change notification touches something their condition depends on (a mutation record
//! on a referenced element, or a session transition). Payloads of gates that fire are queued and
//! handed out by [`VisibilityGates::drain_ready`].

use std::collections::BTreeMap;

use crate::dom::document::{ACTIVE_CLASS, Document, ElementKey, MutationRecord};
use crate::session::state::SessionState;

/// Pure predicate over document and session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// `element` carries `class`.
    HasClass { element: ElementKey, class: String },
    /// The entry door has been passed.
    Entered,
    /// Every sub-condition holds (an empty list holds).
    All(Vec<Condition>),
    /// At least one sub-condition holds.
    Any(Vec<Condition>),
}

impl Condition {
    /// The page container is the active page.
    pub fn page_active(page: ElementKey) -> Self {
        Self::HasClass {
            element: page,
            class: ACTIVE_CLASS.to_owned(),
        }
    }

    pub fn has_class(element: ElementKey, class: impl Into<String>) -> Self {
        Self::HasClass {
            element,
            class: class.into(),
        }
    }

    pub fn evaluate(&self, doc: &Document, session: &SessionState) -> bool {
        match self {
            Self::HasClass { element, class } => doc.has_class(*element, class),
            Self::Entered => session.has_entered(),
            Self::All(cs) => cs.iter().all(|c| c.evaluate(doc, session)),
            Self::Any(cs) => cs.iter().any(|c| c.evaluate(doc, session)),
        }
    }

    fn depends_on_element(&self, key: ElementKey) -> bool {
        match self {
            Self::HasClass { element, .. } => *element == key,
            Self::Entered => false,
            Self::All(cs) | Self::Any(cs) => cs.iter().any(|c| c.depends_on_element(key)),
        }
    }

    fn depends_on_session(&self) -> bool {
        match self {
            Self::HasClass { .. } => false,
            Self::Entered => true,
            Self::All(cs) | Self::Any(cs) => cs.iter().any(Self::depends_on_session),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObserveOpts {
    /// Fire at most once, then detach.
    pub once: bool,
}

impl ObserveOpts {
    pub fn once() -> Self {
        Self { once: true }
    }

    pub fn repeat() -> Self {
        Self { once: false }
    }
}

/// Handle to a live gate subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GateHandle(u64);

#[derive(Clone, Debug)]
struct Gate<T> {
    target: ElementKey,
    condition: Condition,
    payload: T,
    once: bool,
    satisfied: bool,
}

/// Registry of gates delivering payloads of type `T`.
#[derive(Clone, Debug)]
pub struct VisibilityGates<T> {
    gates: BTreeMap<GateHandle, Gate<T>>,
    next_handle: u64,
    seen_generation: u64,
    ready: Vec<T>,
}

impl<T> Default for VisibilityGates<T> {
    fn default() -> Self {
        Self {
            gates: BTreeMap::new(),
            next_handle: 0,
            seen_generation: 0,
            ready: Vec::new(),
        }
    }
}

impl<T: Clone> VisibilityGates<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gate on `target`.
    ///
    /// A missing target is a no-op and returns `None`. The condition is checked immediately: if
    /// it already holds, `on_satisfied` is queued right away, and a one-shot gate is never stored
    /// (the returned handle is then already dead).
    pub fn observe(
        &mut self,
        doc: &Document,
        session: &SessionState,
        target: Option<ElementKey>,
        condition: Condition,
        on_satisfied: T,
        opts: ObserveOpts,
    ) -> Option<GateHandle> {
        let Some(target) = target else {
            tracing::debug!("visibility gate target missing; not observing");
            return None;
        };

        let handle = GateHandle(self.next_handle);
        self.next_handle += 1;

        let satisfied = condition.evaluate(doc, session);
        if satisfied {
            self.ready.push(on_satisfied.clone());
            if opts.once {
                tracing::trace!(?handle, ?target, "one-shot gate satisfied at registration");
                return Some(handle);
            }
        }

        self.gates.insert(
            handle,
            Gate {
                target,
                condition,
                payload: on_satisfied,
                once: opts.once,
                satisfied,
            },
        );
        Some(handle)
    }

    /// Re-evaluate gates affected by `records` or by a session transition since the last call.
    ///
    /// Gates fire only on a `false -> true` edge; repeated notifications while satisfied are
    /// ignored. One-shot gates are released when they fire.
    pub fn notify(&mut self, doc: &Document, session: &SessionState, records: &[MutationRecord]) {
        let session_changed = session.generation() != self.seen_generation;
        self.seen_generation = session.generation();
        if records.is_empty() && !session_changed {
            return;
        }

        let mut released = Vec::new();
        for (&handle, gate) in &mut self.gates {
            let touched = records.iter().any(|r| {
                r.target == gate.target || gate.condition.depends_on_element(r.target)
            }) || (session_changed && gate.condition.depends_on_session());
            if !touched {
                continue;
            }

            let now = gate.condition.evaluate(doc, session);
            let edge = now && !gate.satisfied;
            gate.satisfied = now;
            if edge {
                tracing::trace!(?handle, target = ?gate.target, "visibility gate fired");
                self.ready.push(gate.payload.clone());
                if gate.once {
                    released.push(handle);
                }
            }
        }
        for handle in released {
            self.gates.remove(&handle);
        }
    }

    /// Take the payloads of gates that fired, in firing order.
    pub fn drain_ready(&mut self) -> Vec<T> {
        std::mem::take(&mut self.ready)
    }

    pub fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Release a gate. Returns `false` if it was already released.
    pub fn dispose(&mut self, handle: GateHandle) -> bool {
        self.gates.remove(&handle).is_some()
    }

    pub fn is_live(&self, handle: GateHandle) -> bool {
        self.gates.contains_key(&handle)
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/visibility.rs"]
mod tests;
