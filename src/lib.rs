//! A minimal relational programming engine.
//!
//! Goals are conditions on logic variables. Pursuing a goal in a
//! [`State`](core::state::State) produces a lazy, possibly infinite
//! [`Stream`](core::stream::Stream) of the states that satisfy it.
//! Disjunction and conjunction interleave their branches round-robin, so
//! every answer is eventually produced even when some branch has
//! infinitely many answers or none at all.
//!
//! ```
//! use micro_kanren::prelude::*;
//!
//! let goal = with_variables(["x"], |[x]| either(equal(x, 5), equal(x, 6)));
//! let answers: Vec<Term> = goal
//!     .iter()
//!     .map(|state| state.unwrap().result().unwrap())
//!     .collect();
//! assert_eq!(answers, vec![Term::new(5), Term::new(6)]);
//! ```
//!
//! Unification performs no occurs check.

#[macro_use]
pub mod macros;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod testing;

pub use crate::error::{Error, Result};
