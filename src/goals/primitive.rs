//! Primitive goals: equality, variable introduction and the trivial goals.

use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Goal that unifies two terms. See [`equal`].
#[derive(Clone)]
pub struct Equal {
    a: Term,
    b: Term,
}

impl Goal for Equal {
    fn pursue_in(&self, state: State) -> Stream<State> {
        match state.unify(&self.a, &self.b) {
            Some(s) => Stream::singleton(s),
            None => Stream::empty(),
        }
    }
}

/// Creates a goal that succeeds once if `a` and `b` unify.
pub fn equal(a: impl Into<Term>, b: impl Into<Term>) -> Equal {
    Equal {
        a: a.into(),
        b: b.into(),
    }
}

/// Goal that introduces fresh variables. See [`with_variables`].
pub struct WithVariables<F, G, const N: usize> {
    names: [&'static str; N],
    binder: Arc<F>,
    _goal: PhantomData<fn() -> G>,
}

impl<F, G, const N: usize> Goal for WithVariables<F, G, N>
where
    F: 'static + Fn([Var; N]) -> G,
    G: Goal,
{
    fn pursue_in(&self, state: State) -> Stream<State> {
        let names = self.names;
        let binder = self.binder.clone();
        Stream::suspension(move || {
            let (state, vars) = state.fresh_variables(names);
            debug!(?vars, "introduced variables");
            binder(vars).pursue_in(state)
        })
    }
}

/// Creates a goal that introduces one fresh variable per name, passes
/// them to `binder` and pursues the goal it returns.
///
/// The binder runs only when the goal is pursued, so relations may
/// refer to themselves inside it.
pub fn with_variables<F, G, const N: usize>(
    names: [&'static str; N],
    binder: F,
) -> WithVariables<F, G, N>
where
    F: 'static + Fn([Var; N]) -> G,
    G: Goal,
{
    WithVariables {
        names,
        binder: Arc::new(binder),
        _goal: PhantomData,
    }
}

/// Creates a goal that always succeeds once.
pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

/// Creates a goal that never succeeds.
pub fn fail() -> impl Goal {
    |_: State| -> Stream<State> { Stream::empty() }
}

/// Creates a goal that succeeds infinitely often.
pub fn always() -> impl Goal {
    fn repeat(s: State) -> Stream<State> {
        Stream::cons(s.clone(), Stream::suspension(move || repeat(s)))
    }
    repeat
}

/// Creates a goal that searches forever without succeeding.
pub fn never() -> impl Goal {
    fn diverge(s: State) -> Stream<State> {
        Stream::suspension(move || diverge(s))
    }
    diverge
}
