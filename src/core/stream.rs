//! Lazy, possibly infinite sequences of answers.

use crate::error::{Error, Result};

/// A lazy sequence.
///
/// Each step of a stream is exactly one of: exhausted (`Empty`), a value
/// followed by the rest (`Pair`), a computation that still has to run
/// (`Suspension`), or a fault marker followed by the rest (`Fault`).
pub enum Stream<T> {
    Empty,
    Pair(T, Box<Stream<T>>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
    Fault(Error, Box<Stream<T>>),
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Box::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    /// A stream that reports `err` and then ends.
    pub fn fault(err: Error) -> Self {
        Stream::Fault(err, Box::new(Stream::Empty))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut stream = Stream::Empty;
        for item in items.into_iter().rev() {
            stream = Stream::cons(item, stream);
        }
        stream
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Stream::Empty => true,
            _ => false,
        }
    }

    /// Number of elements, if the stream is fully evaluated.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut s = self;
        loop {
            match s {
                Stream::Empty => return Some(n),
                Stream::Pair(_, d) | Stream::Fault(_, d) => {
                    n += 1;
                    s = d;
                }
                Stream::Suspension(_) => return None,
            }
        }
    }

    /// Force the first `n` elements (faults count as elements).
    pub fn take_inf(self, n: usize) -> Stream<T> {
        Stream::from_results(self.into_iter().take(n))
    }

    /// Force every element. Does not return for infinite streams.
    pub fn take_inf_all(self) -> Stream<T> {
        Stream::from_results(self.into_iter())
    }

    /// Collect all values, stopping at the first fault.
    pub fn into_vec(self) -> Result<Vec<T>> {
        self.into_iter().collect()
    }

    fn from_results(iter: impl Iterator<Item = Result<T>>) -> Self {
        let items: Vec<Result<T>> = iter.collect();
        let mut stream = Stream::Empty;
        for item in items.into_iter().rev() {
            stream = match item {
                Ok(x) => Stream::cons(x, stream),
                Err(e) => Stream::Fault(e, Box::new(stream)),
            };
        }
        stream
    }
}

impl<T: 'static> Stream<T> {
    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Pair(a, d) => {
                let head = f(a);
                Stream::cons(head, Stream::suspension(move || d.map(f)))
            }
            Stream::Suspension(sup) => Stream::suspension(move || sup().map(f)),
            Stream::Fault(e, d) => Stream::Fault(e, Box::new(Stream::suspension(move || d.map(f)))),
        }
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = Result<T>;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        match (self, other) {
            (Empty, Empty) => true,
            (Pair(a, x), Pair(b, y)) => a == b && x == y,
            (Fault(a, x), Fault(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut next = self;
        let mut first = true;
        write!(f, "(")?;
        loop {
            match next {
                Stream::Empty => break,
                Stream::Suspension(_) => {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "...")?;
                    break;
                }
                Stream::Pair(x, n) => {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", x)?;
                    next = n;
                }
                Stream::Fault(e, n) => {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "<{}>", e)?;
                    next = n;
                }
            }
            first = false;
        }
        write!(f, ")")
    }
}

/// Iterator that drives suspensions on demand.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = Result<T>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.0 = *d;
                    return Some(Ok(a));
                }
                Stream::Fault(e, d) => {
                    self.0 = *d;
                    return Some(Err(e));
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naturals(n: u64) -> Stream<u64> {
        Stream::cons(n, Stream::suspension(move || naturals(n + 1)))
    }

    #[test]
    fn take_inf_forces_only_what_is_needed() {
        let s = naturals(0).take_inf(3);
        assert_eq!(s, Stream::from_iter(vec![0, 1, 2]));
        assert_eq!(s.len(), Some(3));
    }

    #[test]
    fn len_of_suspended_stream_is_unknown() {
        assert_eq!(naturals(0).len(), None);
        assert_eq!(Stream::<u64>::empty().len(), Some(0));
    }

    #[test]
    fn iteration_reports_faults_in_place() {
        let s = Stream::cons(1, Stream::Fault(Error::goal("boom"), Box::new(Stream::singleton(2))));
        let items: Vec<_> = s.into_iter().collect();
        assert_eq!(items, vec![Ok(1), Err(Error::goal("boom")), Ok(2)]);
    }

    #[test]
    fn into_vec_stops_at_first_fault() {
        let s = Stream::cons(1, Stream::fault(Error::goal("boom")));
        assert_eq!(s.into_vec(), Err(Error::goal("boom")));
    }

    #[test]
    fn map_is_lazy() {
        let s = naturals(0).map(|n| n * 2).take_inf(3);
        assert_eq!(s.into_vec(), Ok(vec![0, 2, 4]));
    }

    #[test]
    fn debug_shows_forced_prefix() {
        let s = Stream::cons(1, naturals(2));
        assert_eq!(format!("{:?}", s), "(1 2 ...)");
        assert_eq!(format!("{:?}", Stream::<u8>::empty()), "()");
    }
}
