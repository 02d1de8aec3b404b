//! Error types for contract violations.
//!
//! A goal that has no solutions is not an error; it simply produces an
//! empty stream. The errors here report misuse of the API, such as
//! converting a term that is not a sequence into a list.

use thiserror::Error;

/// Result type for term conversions and state inspection
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of normal search control flow
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The term is neither a pair nor the empty sequence marker
    #[error("not a sequence: {0}")]
    NotASequence(String),

    /// The term is not built from the zero and successor markers
    #[error("not a Peano numeral: {0}")]
    NotANumeral(String),

    /// The state has no variables to report a result for
    #[error("state has no variables")]
    NoVariables,

    /// A user-defined goal faulted while producing states
    #[error("goal failed: {0}")]
    Goal(String),
}

impl Error {
    pub fn goal(message: impl Into<String>) -> Self {
        Error::Goal(message.into())
    }
}
