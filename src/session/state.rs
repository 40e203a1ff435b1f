/// Process-wide session state.
///
/// Holds the "entered" condition, which has exactly one allowed transition (`false -> true`).
/// Only the entry door flips it; everything else observes it through a
/// [`crate::Condition::Entered`] gate.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    entered: bool,
    generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Bumped on every state transition; lets observers tell whether anything changed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Perform the `false -> true` transition. Returns `false` if already entered.
    pub(crate) fn enter(&mut self) -> bool {
        if self.entered {
            return false;
        }
        self.entered = true;
        self.generation += 1;
        tracing::info!("session entered");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
