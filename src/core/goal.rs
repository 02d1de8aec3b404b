use crate::core::state::State;
use crate::core::stream::{Stream, StreamIter};
use std::sync::Arc;

/// A logical condition: maps a state to the lazy stream of states that
/// satisfy it.
pub trait Goal: 'static {
    fn pursue_in(&self, state: State) -> Stream<State>;

    /// Pursue in a state that may be the failed state.
    ///
    /// A failed state absorbs every goal: the result is always empty.
    fn pursue_maybe(&self, state: Option<State>) -> Stream<State> {
        match state {
            Some(state) => self.pursue_in(state),
            None => Stream::empty(),
        }
    }

    /// Pursue in an empty state and force at most `n` answers.
    fn run(&self, n: usize) -> Stream<State> {
        self.pursue_in(State::empty()).take_inf(n)
    }

    /// Pursue in an empty state and iterate over all answers.
    fn iter(&self) -> StreamIter<State> {
        self.pursue_in(State::empty()).into_iter()
    }
}

impl<F: 'static + Fn(State) -> Stream<State>> Goal for F {
    fn pursue_in(&self, state: State) -> Stream<State> {
        self(state)
    }
}

/// Type-erased, shareable goal.
#[derive(Clone)]
pub struct SharedGoal(Arc<dyn Goal>);

impl SharedGoal {
    pub fn new(goal: impl Goal) -> Self {
        SharedGoal(Arc::new(goal))
    }
}

impl Goal for SharedGoal {
    fn pursue_in(&self, state: State) -> Stream<State> {
        self.0.pursue_in(state)
    }
}
