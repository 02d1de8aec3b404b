//! Compose goals using combinators to build more complex goals
//!
//! The interleaving combinators merge the streams they produce with the round-robin
//! scheduler, so an infinite branch never hides the answers of another.

use crate::core::goal::{Goal, SharedGoal};
use crate::core::scheduler::{FaultPolicy, Scheduler};
use crate::core::state::State;
use crate::core::stream::Stream;
use std::sync::Arc;

/// Fair disjunction. See [`either`].
pub struct Either<G1, G2> {
    first: G1,
    second: G2,
    policy: FaultPolicy,
}

impl<G1, G2> Either<G1, G2> {
    pub fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<G1: Goal, G2: Goal> Goal for Either<G1, G2> {
    fn pursue_in(&self, state: State) -> Stream<State> {
        let mut scheduler = Scheduler::new(self.policy);
        scheduler.push(self.first.pursue_in(state.clone()));
        scheduler.push(self.second.pursue_in(state));
        scheduler.into_stream()
    }
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn either<G1: Goal, G2: Goal>(first: G1, second: G2) -> Either<G1, G2> {
    Either {
        first,
        second,
        policy: FaultPolicy::default(),
    }
}

/// Fair disjunction over any number of goals. See [`any`].
pub struct Any {
    goals: Vec<SharedGoal>,
    policy: FaultPolicy,
}

impl Any {
    pub fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Goal for Any {
    fn pursue_in(&self, state: State) -> Stream<State> {
        let mut scheduler = Scheduler::new(self.policy);
        for goal in &self.goals {
            scheduler.push(goal.pursue_in(state.clone()));
        }
        scheduler.into_stream()
    }
}

/// Creates a goal that succeeds if any of `goals` succeeds, giving every
/// goal an equal share of the search.
pub fn any(goals: impl IntoIterator<Item = SharedGoal>) -> Any {
    Any {
        goals: goals.into_iter().collect(),
        policy: FaultPolicy::default(),
    }
}

/// Conjunction. See [`both`].
pub struct Both<G1, G2> {
    first: G1,
    second: Arc<G2>,
    policy: FaultPolicy,
}

impl<G1, G2> Both<G1, G2> {
    pub fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl<G1: Goal, G2: Goal> Goal for Both<G1, G2> {
    fn pursue_in(&self, state: State) -> Stream<State> {
        let states = self.first.pursue_in(state);
        pursue_in_each(self.second.clone(), states, self.policy)
    }
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn both<G1: Goal, G2: Goal>(first: G1, second: G2) -> Both<G1, G2> {
    Both {
        first,
        second: Arc::new(second),
        policy: FaultPolicy::default(),
    }
}

/// Pursue `goal` in every state of `states`, interleaving all of the
/// resulting streams.
///
/// Faults in `states` are passed through without pursuing `goal`.
pub fn pursue_in_each<G: Goal>(
    goal: Arc<G>,
    states: Stream<State>,
    policy: FaultPolicy,
) -> Stream<State> {
    let mut scheduler = Scheduler::new(policy);
    scheduler.spawn(states, Arc::new(move |s| goal.pursue_in(s)));
    scheduler.into_stream()
}
