pub use crate::{
    core::{
        goal::{Goal, SharedGoal},
        logic_variable::Var,
        pair::Pair,
        scheduler::{interleave, interleave_with, FaultPolicy, Scheduler},
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::{Atom, Atomic, Marker, Term},
    },
    goals::{
        combinators::{any, both, either, pursue_in_each},
        list::{append, from_list, to_list},
        numbers::{add, from_peano, multiply, to_peano},
        primitive::{always, equal, fail, never, succeed, with_variables},
    },
};
