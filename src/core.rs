//! Core data structures and logic algorithms

pub mod goal;
pub mod logic_variable;
pub mod pair;
pub mod scheduler;
pub mod state;
pub mod stream;
pub mod substitution;
pub mod term;
