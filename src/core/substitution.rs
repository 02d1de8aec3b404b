//! Substitutions map variables to terms.
//!
//! A bound variable's term may itself contain variables. Bindings are not
//! compressed when they are made; chains are followed at lookup time.
//!
//! No occurs check is performed. Binding a variable to a term that
//! contains it produces a cyclic substitution, and walking such a
//! substitution does not terminate.

use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use crate::core::term::Term;
use im::HashMap;
use std::fmt::Formatter;
use std::sync::Arc;
use tracing::trace;

/// Persistent mapping of variables to terms.
///
/// Cloning is cheap and extending a clone never affects the original.
#[derive(Clone, Default, PartialEq)]
pub struct Substitution {
    subs: HashMap<Var, Term>,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: HashMap::new(),
        }
    }

    /// Get number of substituted variables
    pub fn n_subs(&self) -> usize {
        self.subs.len()
    }

    /// Look up the direct binding of `var`, without following chains.
    pub fn get(&self, var: &Var) -> Option<&Term> {
        self.subs.get(var)
    }

    /// Follow variable bindings until reaching an unbound variable,
    /// a pair or an atom.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        while let Term::Var(var) = t {
            match self.subs.get(var) {
                Some(next) => t = next,
                None => break,
            }
        }
        t
    }

    /// Resolve `t` and, recursively, the components of any pair.
    ///
    /// Left components recurse; the right spine is followed in a loop so
    /// that long sequences resolve in constant stack space.
    pub fn walk_star(&self, t: &Term) -> Term {
        let mut lefts = Vec::new();
        let mut rest = self.walk(t);
        while let Term::Pair(p) = rest {
            lefts.push(self.walk_star(&p.left));
            rest = self.walk(&p.right);
        }
        let mut resolved = rest.clone();
        for left in lefts.into_iter().rev() {
            resolved = Pair::new(left, resolved).into();
        }
        resolved
    }

    /// Return a substitution with `x` bound to `t`.
    ///
    /// Existing bindings for the same variable are replaced.
    pub fn extended(&self, x: Var, t: Term) -> Self {
        trace!(var = ?x, term = ?t, "bind");
        Substitution {
            subs: self.subs.update(x, t),
        }
    }

    /// Overlay `bindings` on this substitution; new entries win.
    pub fn overlaid(&self, bindings: impl IntoIterator<Item = (Var, Term)>) -> Self {
        let mut subs = self.subs.clone();
        subs.extend(bindings);
        Substitution { subs }
    }

    /// Attempt to unify terms `u` and `v` under this substitution.
    ///
    /// Returns `None` if the terms cannot be made equal. Left components
    /// of pairs are unified first; the right components are then unified
    /// under the resulting substitution.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        let mut subs = self.clone();
        let mut u = u.clone();
        let mut v = v.clone();
        loop {
            let (wu, wv) = (subs.walk(&u).clone(), subs.walk(&v).clone());

            if shallow_eq(&wu, &wv) {
                return Some(subs);
            }

            if let Term::Var(x) = wu {
                return Some(subs.extended(x, wv));
            }

            if let Term::Var(y) = wv {
                return Some(subs.extended(y, wu));
            }

            match (&wu, &wv) {
                (Term::Pair(pu), Term::Pair(pv)) => {
                    subs = subs.unify(&pu.left, &pv.left)?;
                    u = pu.right.clone();
                    v = pv.right.clone();
                }
                _ => {
                    trace!(left = ?wu, right = ?wv, "mismatch");
                    return None;
                }
            }
        }
    }
}

/// Equality that does not descend into distinct pairs.
///
/// Structurally equal pairs still unify without new bindings, one
/// component at a time.
fn shallow_eq(u: &Term, v: &Term) -> bool {
    match (u, v) {
        (Term::Pair(p), Term::Pair(q)) => Arc::ptr_eq(p, q),
        _ => u == v,
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution
#[cfg(test)]
macro_rules! substitution {
    () => { $crate::core::substitution::Substitution::empty() };

    ($($var:ident : $val:expr),*) => {{
        $crate::core::substitution::Substitution::empty().overlaid(vec![
            $( ($var.clone(), $crate::core::term::Term::from($val.clone())) ),*
        ])
    }}
}
