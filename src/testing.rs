use crate::core::goal::Goal;
use crate::core::term::Term;
use crate::error::Result;

/// Assert that a goal fails
pub fn fails(goal: impl Goal) {
    let result = goal.run(1);
    assert!(result.is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal) {
    let result = goal.run(1);
    assert!(!result.is_empty());
}

pub fn has_unique_solution(
    mut solutions: impl Iterator<Item = Result<Vec<Term>>>,
    expected: Vec<Term>,
) {
    assert_eq!(solutions.next(), Some(Ok(expected)));
    assert_eq!(solutions.next(), None);
}
