//! Logic-compatible numbers.
//!
//! Numbers are Peano numerals: zero is the `Zero` marker and `n + 1` is
//! the pair `(Successor . n)`. This is horribly inefficient but very
//! simple, and every relation works in all directions.

use crate::core::term::{Marker, Term};
use crate::error::{Error, Result};
use crate::prelude::*;
use std::sync::{Mutex, OnceLock};

/// Numerals built so far; entry `n` encodes `n`.
static NUMERALS: OnceLock<Mutex<Vec<Term>>> = OnceLock::new();

/// Encode `n` as a Peano numeral.
///
/// Numerals are cached for the lifetime of the process, and every
/// numeral shares its tail with the numeral one smaller.
pub fn to_peano(n: u64) -> Term {
    let cache = NUMERALS.get_or_init(|| Mutex::new(vec![Term::new(Marker::Zero)]));
    let mut numerals = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    while (numerals.len() as u64) <= n {
        let next = match numerals.last() {
            Some(prev) => Term::cons(Marker::Successor, prev.clone()),
            None => Term::new(Marker::Zero),
        };
        numerals.push(next);
    }
    numerals[n as usize].clone()
}

/// Decode a Peano numeral.
pub fn from_peano(numeral: &Term) -> Result<u64> {
    let mut n = 0;
    let mut rest = numeral;
    loop {
        if rest.is_marker(Marker::Zero) {
            return Ok(n);
        }
        match rest.try_as_pair() {
            Some(pair) if pair.left.is_marker(Marker::Successor) => {
                n += 1;
                rest = &pair.right;
            }
            _ => return Err(Error::NotANumeral(format!("{:?}", numeral))),
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if x + y equals z
    pub add(x, y, z) {
        either(
            // 0 + y == y
            both(equal(x.clone(), Marker::Zero), equal(y.clone(), z.clone())),
            // (x>0) + y == z  =>  (x-1) + y == z-1
            with_variables(["smaller_x", "smaller_z"], move |[smaller_x, smaller_z]| {
                both(
                    both(
                        equal(x.clone(), Term::cons(Marker::Successor, smaller_x)),
                        equal(z.clone(), Term::cons(Marker::Successor, smaller_z)),
                    ),
                    add(smaller_x, y.clone(), smaller_z),
                )
            }),
        )
    }
}

defrel! {
    /// Creates a goal that succeeds if x * y equals z
    pub multiply(x, y, z) {
        either(
            // 0 * y == 0
            both(equal(x.clone(), Marker::Zero), equal(z.clone(), Marker::Zero)),
            // (x>0) * y == z  =>  (x-1) * y == z-y
            with_variables(["smaller_x", "smaller_z"], move |[smaller_x, smaller_z]| {
                both(
                    both(
                        equal(x.clone(), Term::cons(Marker::Successor, smaller_x)),
                        add(smaller_z, y.clone(), z.clone()),
                    ),
                    multiply(smaller_x, y.clone(), smaller_z),
                )
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fails, has_unique_solution, succeeds};

    fn numbers(answer: Vec<Term>) -> Vec<u64> {
        answer.iter().map(|t| from_peano(t).unwrap()).collect()
    }

    #[test]
    fn zero_is_the_zero_marker() {
        assert_eq!(to_peano(0), Term::new(Marker::Zero));
    }

    #[test]
    fn numerals_are_nested_successor_pairs() {
        assert_eq!(
            to_peano(2),
            Term::cons(Marker::Successor, Term::cons(Marker::Successor, Marker::Zero))
        );
    }

    #[test]
    fn conversion_is_memoized() {
        let a = to_peano(7);
        let b = to_peano(7);
        match (a, b) {
            (Term::Pair(a), Term::Pair(b)) => assert!(std::sync::Arc::ptr_eq(&a, &b)),
            _ => panic!("expected pairs"),
        }
    }

    #[test]
    fn from_peano_rejects_other_terms() {
        assert!(matches!(from_peano(&Term::new(3)), Err(Error::NotANumeral(_))));
        assert!(from_peano(&Term::cons(Marker::Successor, Term::empty())).is_err());
        assert!(from_peano(&Term::cons(1, Marker::Zero)).is_err());
    }

    #[test]
    fn add_obeys_additive_identity() {
        succeeds(add(to_peano(0), to_peano(7), to_peano(7)));
        succeeds(add(to_peano(7), to_peano(0), to_peano(7)));
    }

    #[test]
    fn add_fails_for_wrong_addition() {
        fails(add(to_peano(1), to_peano(1), to_peano(3)));
    }

    #[test]
    fn add_computes_sum_of_two_values() {
        has_unique_solution(run!((q), add(to_peano(5), to_peano(3), q)), vec![to_peano(8)]);
    }

    #[test]
    fn add_computes_differences() {
        has_unique_solution(run!((q), add(to_peano(1), q, to_peano(3))), vec![to_peano(2)]);
        has_unique_solution(run!((q), add(q, to_peano(2), to_peano(3))), vec![to_peano(1)]);
    }

    #[test]
    fn add_generates_all_number_pairs_that_sum_to_a_value() {
        let mut pairs: Vec<Vec<u64>> = run!(*, (a, b), add(a, b, to_peano(3)))
            .into_vec()
            .unwrap()
            .into_iter()
            .map(numbers)
            .collect();
        pairs.sort();
        assert_eq!(pairs, vec![vec![0, 3], vec![1, 2], vec![2, 1], vec![3, 0]]);
    }

    #[test]
    fn add_fails_if_it_would_need_a_negative_number() {
        fails(fresh!((x), add(x, to_peano(2), to_peano(1))));
        fails(fresh!((x), add(to_peano(2), x, to_peano(1))));
    }

    #[test]
    fn multiply_succeeds_for_trivial_cases() {
        succeeds(multiply(to_peano(0), to_peano(2), to_peano(0)));
        succeeds(multiply(to_peano(1), to_peano(1), to_peano(1)));
        succeeds(multiply(to_peano(2), to_peano(1), to_peano(2)));
    }

    #[test]
    fn multiply_computes_product_of_two_values() {
        // the search for further products never ends, so only ask for one
        let answer = run!(1, (q), multiply(to_peano(2), to_peano(3), q))
            .into_vec()
            .unwrap();
        assert_eq!(answer, vec![vec![to_peano(6)]]);
    }

    #[test]
    fn multiply_computes_quotients() {
        let answer = run!(1, (q), multiply(to_peano(3), q, to_peano(12)))
            .into_vec()
            .unwrap();
        assert_eq!(answer, vec![vec![to_peano(4)]]);
    }

    #[test]
    fn multiply_finds_factor_pairs() {
        let pairs: Vec<Vec<u64>> = run!(4, (a, b), multiply(a, b, to_peano(6)))
            .into_vec()
            .unwrap()
            .into_iter()
            .map(numbers)
            .collect();
        assert_eq!(pairs.len(), 4);
        for pair in pairs {
            assert_eq!(pair[0] * pair[1], 6);
        }
    }
}
