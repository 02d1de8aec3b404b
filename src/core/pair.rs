use crate::core::logic_variable::Var;
use crate::core::term::{Marker, Term};
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

/// Ordered pair of terms; the building block of sequences and numerals.
///
/// Sequences and numerals nest along `right`, so dropping, comparing and
/// printing walk that spine in a loop rather than recursing.
#[derive(Clone)]
pub struct Pair {
    pub left: Term,
    pub right: Term,
}

impl Pair {
    pub fn new(left: Term, right: Term) -> Self {
        Pair { left, right }
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        if self.right.try_as_pair().is_none() {
            return;
        }
        let mut rest = std::mem::replace(&mut self.right, Term::Var(Var::detached()));
        while let Term::Pair(next) = rest {
            match Arc::try_unwrap(next) {
                Ok(mut pair) => {
                    rest = std::mem::replace(&mut pair.right, Term::Var(Var::detached()));
                }
                // still shared, so somebody else will drop the tail
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({:?}", self.left)?;
        let mut rest = &self.right;
        loop {
            if rest.is_marker(Marker::Empty) {
                break;
            }
            match rest.try_as_pair() {
                Some(next) => {
                    write!(f, " {:?}", next.left)?;
                    rest = &next.right;
                }
                None => {
                    write!(f, " . {:?}", rest)?;
                    break;
                }
            }
        }
        write!(f, ")")
    }
}

impl From<(Term, Term)> for Pair {
    fn from(pair: (Term, Term)) -> Self {
        Pair::new(pair.0, pair.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_list(n: u64) -> Term {
        Term::from((0..n).map(|i| Term::new(i)).collect::<Vec<_>>())
    }

    #[test]
    fn pairs_print_two_values_in_parentheses_separated_by_dot() {
        let pair = Pair::new(Term::new(1), Term::new(2));
        assert_eq!(format!("{:?}", pair), "(1 . 2)")
    }

    #[test]
    fn pairs_print_only_left_value_if_right_is_empty() {
        let pair = Pair::new(Term::new(1), Term::empty());
        assert_eq!(format!("{:?}", pair), "(1)")
    }

    #[test]
    fn pairs_print_as_list_if_right_is_pair() {
        let pair = Pair::new(Term::new(1), Term::cons(2, 3));
        assert_eq!(format!("{:?}", pair), "(1 2 . 3)")
    }

    #[test]
    fn nested_lists_print_inside_their_parent() {
        let nested = Term::cons(Term::cons(1, Term::empty()), Term::cons(2, Term::empty()));
        assert_eq!(format!("{:?}", nested), "((1) 2)");
    }

    #[test]
    fn peano_numerals_print_as_nested_pairs() {
        let two = Term::cons(
            Marker::Successor,
            Term::cons(Marker::Successor, Marker::Zero),
        );
        assert_eq!(format!("{:?}", two), "(succ succ . zero)");
    }

    #[test]
    fn long_lists_drop_without_exhausting_the_stack() {
        drop(long_list(300_000));
    }

    #[test]
    fn dropping_a_list_keeps_shared_tails_alive() {
        let tail = long_list(3);
        let list = Term::cons(0, tail.clone());
        drop(list);
        assert_eq!(format!("{:?}", tail), "(0 1 2)");
    }

    #[test]
    fn long_lists_compare_and_print_without_exhausting_the_stack() {
        let a = long_list(300_000);
        let b = long_list(300_000);
        assert_eq!(a, b);
        assert_ne!(a, long_list(299_999));
        assert!(format!("{:?}", a).ends_with("299998 299999)"));
    }
}
