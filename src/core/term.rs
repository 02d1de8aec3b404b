//! Terms are the values logic variables range over.
//!
//! A term is a logic variable, a pair of terms or an atom. Pairs chained
//! through their second component and terminated by [`Marker::Empty`]
//! encode sequences; pairs headed by [`Marker::Successor`] and terminated
//! by [`Marker::Zero`] encode Peano numerals.

use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use std::any::Any;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Types that can appear as atomic values in a term.
pub trait Atomic: Debug + Send + Sync {}

impl Atomic for () {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for f64 {}

impl Atomic for f32 {}

impl Atomic for String {}

impl Atomic for &'static str {}

/// Object-safe view of an atomic value.
pub trait AtomValue: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn eqv(&self, other: &dyn AtomValue) -> bool;
}

impl<T: 'static + Atomic + PartialEq> AtomValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn AtomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// Distinguished atoms used by the sequence and numeral encodings.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Terminates a pair-encoded sequence.
    Empty,
    /// The Peano numeral zero.
    Zero,
    /// Heads every Peano successor pair.
    Successor,
}

impl Atomic for Marker {}

impl Debug for Marker {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Marker::Empty => write!(f, "()"),
            Marker::Zero => write!(f, "zero"),
            Marker::Successor => write!(f, "succ"),
        }
    }
}

/// An immutable atomic value.
#[derive(Clone)]
pub struct Atom(Arc<dyn AtomValue>);

impl Atom {
    pub fn new<T: 'static + Atomic + PartialEq>(value: T) -> Self {
        Atom(Arc::new(value))
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eqv(&*other.0)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A logic term.
#[derive(Clone)]
pub enum Term {
    Var(Var),
    Pair(Arc<Pair>),
    Atom(Atom),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn atom<T: 'static + Atomic + PartialEq>(value: T) -> Self {
        Term::Atom(Atom::new(value))
    }

    /// Build a pair from two terms.
    pub fn cons(left: impl Into<Term>, right: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(Pair::new(left.into(), right.into())))
    }

    /// The empty sequence marker.
    pub fn empty() -> Self {
        Term::atom(Marker::Empty)
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn try_as_pair(&self) -> Option<&Pair> {
        match self {
            Term::Pair(p) => Some(p),
            _ => None,
        }
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Term::Atom(a) => a.downcast_ref(),
            _ => None,
        }
    }

    pub fn is_marker(&self, marker: Marker) -> bool {
        self.downcast_ref::<Marker>() == Some(&marker)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Term::Var(x), Term::Var(y)) => return x == y,
                (Term::Atom(x), Term::Atom(y)) => return x == y,
                (Term::Pair(p), Term::Pair(q)) => {
                    if Arc::ptr_eq(p, q) {
                        return true;
                    }
                    if p.left != q.left {
                        return false;
                    }
                    a = &p.right;
                    b = &q.right;
                }
                _ => return false,
            }
        }
    }
}

impl Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Pair(p) => write!(f, "{:?}", p),
            Term::Atom(a) => write!(f, "{:?}", a),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::Pair(Arc::new(p))
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl<A: Into<Term>, B: Into<Term>> From<(A, B)> for Term {
    fn from((a, b): (A, B)) -> Self {
        Term::cons(a, b)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        let mut list = Term::empty();
        for t in items.into_iter().rev() {
            list = Term::cons(t, list);
        }
        list
    }
}

macro_rules! atomic_into_term {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Term {
                fn from(v: $t) -> Self {
                    Term::atom(v)
                }
            }
        )*
    };
}

atomic_into_term!(
    (),
    bool,
    u8,
    u16,
    u32,
    u64,
    usize,
    i8,
    i16,
    i32,
    i64,
    isize,
    char,
    f32,
    f64,
    String,
    &'static str,
    Marker
);

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.try_as_var().map(|sv| &sv == v).unwrap_or(false)
    }
}

macro_rules! atomic_partial_eq {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for Term {
                fn eq(&self, other: &$t) -> bool {
                    self.downcast_ref::<$t>().map(|x| x == other).unwrap_or(false)
                }
            }
        )*
    };
}

atomic_partial_eq!(bool, u64, i32, i64, char, String, &'static str, Marker);
