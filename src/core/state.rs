//! Immutable search states.
//!
//! A state pairs a substitution with the list of variables introduced so
//! far. The variable list only serves to report answers positionally.

use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use crate::error::{Error, Result};
use im::Vector;
use std::fmt;

/// Snapshot of the search: introduced variables and their bindings.
#[derive(Clone, Default, PartialEq)]
pub struct State {
    variables: Vector<Var>,
    substitution: Substitution,
}

impl State {
    /// A state with no variables and no bindings.
    pub fn empty() -> Self {
        State::default()
    }

    /// Start from an empty state with the given variables.
    pub fn with_variables<const N: usize>(names: [&'static str; N]) -> (Self, [Var; N]) {
        State::empty().fresh_variables(names)
    }

    pub fn variables(&self) -> impl Iterator<Item = &Var> {
        self.variables.iter()
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// Append one new variable per name.
    ///
    /// Every returned variable is distinct, even if names repeat.
    pub fn create_variables(
        &self,
        names: impl IntoIterator<Item = &'static str>,
    ) -> (Self, Vec<Var>) {
        let new_variables: Vec<Var> = names.into_iter().map(Var::new).collect();
        (self.introducing(&new_variables), new_variables)
    }

    /// Like [`State::create_variables`], for a statically known number of names.
    pub fn fresh_variables<const N: usize>(&self, names: [&'static str; N]) -> (Self, [Var; N]) {
        let new_variables = names.map(Var::new);
        (self.introducing(&new_variables), new_variables)
    }

    fn introducing(&self, new_variables: &[Var]) -> Self {
        let mut variables = self.variables.clone();
        variables.extend(new_variables.iter().copied());
        State {
            variables,
            substitution: self.substitution.clone(),
        }
    }

    /// Return a state whose bindings are overlaid with `bindings`.
    pub fn assign_values(&self, bindings: impl IntoIterator<Item = (Var, Term)>) -> Self {
        State {
            variables: self.variables.clone(),
            substitution: self.substitution.overlaid(bindings),
        }
    }

    /// Follow bindings of `term` until it is no longer a bound variable.
    pub fn chase<'a>(&'a self, term: &'a Term) -> &'a Term {
        self.substitution.walk(term)
    }

    /// Resolve `term` as far as the current bindings allow, including
    /// inside pairs.
    pub fn value_of(&self, term: &Term) -> Term {
        self.substitution.walk_star(term)
    }

    /// Same as [`State::value_of`].
    pub fn final_value_of(&self, term: &Term) -> Term {
        self.value_of(term)
    }

    /// Unify `a` and `b`, returning `None` if they cannot be made equal.
    pub fn unify(&self, a: &Term, b: &Term) -> Option<Self> {
        let substitution = self.substitution.unify(a, b)?;
        Some(State {
            variables: self.variables.clone(),
            substitution,
        })
    }

    /// Resolved values of the first `n` variables, in the order they were
    /// introduced. Returns fewer values if the state has fewer variables.
    pub fn results(&self, n: usize) -> Vec<Term> {
        self.variables
            .iter()
            .take(n)
            .map(|v| self.value_of(&Term::var(*v)))
            .collect()
    }

    /// Resolved value of the first variable.
    pub fn result(&self) -> Result<Term> {
        self.results(1).pop().ok_or(Error::NoVariables)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.substitution)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#<State: variables=[")?;
        for (i, var) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, "], values={:?}>", self.substitution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_variables_appends_distinct_variables() {
        let (s1, vars1) = State::empty().create_variables(vec!["x", "x"]);
        assert_eq!(vars1.len(), 2);
        assert_ne!(vars1[0], vars1[1]);

        let (s2, [y]) = s1.fresh_variables(["y"]);
        assert_eq!(
            s2.variables().copied().collect::<Vec<_>>(),
            vec![vars1[0], vars1[1], y]
        );
        assert_eq!(s1.variables().count(), 2);
    }

    #[test]
    fn assign_values_does_not_mutate_original() {
        let (s, [x]) = State::with_variables(["x"]);
        let t = s.assign_values(vec![(x, Term::new(5))]);
        assert_eq!(s.value_of(&x.into()), Term::var(x));
        assert_eq!(t.value_of(&x.into()), Term::new(5));
    }

    #[test]
    fn value_of_resolves_nested_pairs() {
        let (s, [x, y]) = State::with_variables(["x", "y"]);
        let s = s.assign_values(vec![(x, Term::cons(y, y)), (y, Term::new("a"))]);
        assert_eq!(s.value_of(&x.into()), Term::cons("a", "a"));
        assert_eq!(s.final_value_of(&x.into()), Term::cons("a", "a"));
        assert_eq!(s.chase(&x.into()), &Term::cons(y, y));
    }

    #[test]
    fn value_of_only_sees_bindings_at_call_time() {
        let (s, [x, y]) = State::with_variables(["x", "y"]);
        let s = s.assign_values(vec![(x, Term::cons(y, 1))]);
        let early = s.value_of(&x.into());
        let later = s.assign_values(vec![(y, Term::new(0))]);
        assert_eq!(early, Term::cons(y, 1));
        assert_eq!(later.value_of(&x.into()), Term::cons(0, 1));
    }

    #[test]
    fn results_truncates_to_available_variables() {
        let (s, [x, _y]) = State::with_variables(["x", "y"]);
        let s = s.unify(&x.into(), &Term::new(5)).unwrap();
        let results = s.results(5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Term::new(5));
    }

    #[test]
    fn result_of_state_without_variables_is_an_error() {
        assert_eq!(State::empty().result(), Err(Error::NoVariables));
    }

    #[test]
    fn failed_unification_is_distinct_from_empty_state() {
        let s = State::empty();
        assert_eq!(s.unify(&Term::new(1), &Term::new(1)), Some(State::empty()));
        assert_eq!(s.unify(&Term::new(1), &Term::new(2)), None);
    }

    #[test]
    fn display_lists_variables_and_values() {
        let (s, [x]) = State::with_variables(["x"]);
        let s = s.unify(&x.into(), &Term::new(5)).unwrap();
        assert_eq!(s.to_string(), "#<State: variables=[#<Var: x>], values={x: 5}>");
    }
}
