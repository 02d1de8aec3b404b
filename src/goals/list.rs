//! Pair-encoded sequences.
//!
//! A sequence is a chain of pairs whose left components are the items
//! and whose last right component is the empty marker.

use crate::core::term::{Marker, Term};
use crate::error::{Error, Result};
use crate::prelude::*;

/// Encode `items` as a pair-encoded sequence.
pub fn from_list<T: Into<Term>>(items: impl IntoIterator<Item = T>) -> Term {
    let items: Vec<Term> = items.into_iter().map(Into::into).collect();
    Term::from(items)
}

/// Decode a pair-encoded sequence into its items.
pub fn to_list(sequence: &Term) -> Result<Vec<Term>> {
    let mut items = Vec::new();
    let mut rest = sequence;
    loop {
        if rest.is_marker(Marker::Empty) {
            return Ok(items);
        }
        match rest.try_as_pair() {
            Some(pair) => {
                items.push(pair.left.clone());
                rest = &pair.right;
            }
            None => return Err(Error::NotASequence(format!("{:?}", sequence))),
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if `c` is `a` followed by `b`.
    pub append(a, b, c) {
        either(
            both(equal(a.clone(), Term::empty()), equal(b.clone(), c.clone())),
            with_variables(["first", "rest_of_a", "rest_of_c"], move |[first, rest_of_a, rest_of_c]| {
                both(
                    both(
                        equal(a.clone(), Term::cons(first, rest_of_a)),
                        equal(c.clone(), Term::cons(first, rest_of_c)),
                    ),
                    append(rest_of_a, b.clone(), rest_of_c),
                )
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fails, has_unique_solution, succeeds};

    fn hello() -> Term {
        from_list(vec!["h", "e", "l", "l", "o"])
    }

    #[test]
    fn empty_list_is_the_empty_marker() {
        assert_eq!(from_list(Vec::<Term>::new()), Term::empty());
        assert_eq!(to_list(&Term::empty()), Ok(vec![]));
    }

    #[test]
    fn to_list_rejects_atoms() {
        assert!(matches!(to_list(&Term::new(5)), Err(Error::NotASequence(_))));
    }

    #[test]
    fn to_list_rejects_improper_sequences() {
        assert!(to_list(&Term::cons(1, 2)).is_err());
    }

    #[test]
    fn long_lists_survive_encoding() {
        let items: Vec<Term> = (0..150_000u64).map(|n| Term::new(n)).collect();
        assert_eq!(to_list(&from_list(items.clone())), Ok(items));
    }

    #[test]
    fn equal_accepts_long_identical_lists() {
        let states = equal(from_list(0..150_000u64), from_list(0..150_000u64))
            .pursue_in(State::empty())
            .into_vec()
            .unwrap();
        assert_eq!(states, vec![State::empty()]);
    }

    #[test]
    fn equal_resolves_long_lists_through_variables() {
        let (state, [x]) = State::with_variables(["x"]);
        let states = equal(x, from_list(0..150_000u64))
            .pursue_in(state)
            .into_vec()
            .unwrap();
        let items = to_list(&states[0].result().unwrap()).unwrap();
        assert_eq!(items.len(), 150_000);
        assert_eq!(items[149_999], Term::new(149_999u64));
    }

    #[test]
    fn append_concatenates() {
        has_unique_solution(
            run!((x), append(from_list(vec!["h", "e"]), from_list(vec!["l", "l", "o"]), x)),
            vec![hello()],
        );
    }

    #[test]
    fn append_checks_concatenations() {
        succeeds(append(from_list(vec![1]), from_list(vec![2]), from_list(vec![1, 2])));
        fails(append(from_list(vec![1]), from_list(vec![2]), from_list(vec![2, 1])));
    }

    #[test]
    fn append_computes_prefix() {
        has_unique_solution(
            run!((x), append(x, from_list(vec!["l", "o"]), hello())),
            vec![from_list(vec!["h", "e", "l"])],
        );
    }

    #[test]
    fn append_enumerates_all_splits() {
        let splits = run!(*, (x, y), append(x, y, hello())).into_vec().unwrap();
        assert_eq!(splits.len(), 6);
        for split in splits {
            let mut joined = to_list(&split[0]).unwrap();
            joined.extend(to_list(&split[1]).unwrap());
            assert_eq!(from_list(joined), hello());
        }
    }
}
