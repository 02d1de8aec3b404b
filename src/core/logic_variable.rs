//! Logic variables.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of variable serial numbers; `usize::MAX` is never handed out.
static NEXT_SERIAL: AtomicUsize = AtomicUsize::new(0);

/// A logic variable: a label for humans and a serial number for identity.
///
/// Two variables are the same variable iff their serials match; labels
/// may repeat freely. Copies share the serial.
#[derive(Copy, Clone)]
pub struct Var {
    label: &'static str,
    serial: usize,
}

impl Var {
    /// Create a variable distinct from every variable created before.
    pub fn new(label: &'static str) -> Self {
        Var {
            label,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Placeholder that never takes part in a search.
    pub(crate) const fn detached() -> Self {
        Var {
            label: "_",
            serial: usize::MAX,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Position of this variable in creation order.
    pub fn serial(&self) -> usize {
        self.serial
    }
}

impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for Var {}

impl Hash for Var {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

impl From<&'static str> for Var {
    fn from(label: &'static str) -> Self {
        Var::new(label)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#<Var: {}>", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serials_increase_in_creation_order() {
        let first = Var::new("a");
        let second = Var::new("b");
        assert!(second.serial() > first.serial());
        assert_eq!(first.label(), "a");
    }

    #[test]
    fn identity_ignores_labels() {
        let x = Var::new("x");
        assert_ne!(x, Var::new("x"));
        let copy = x;
        assert_eq!(copy, x);
    }

    #[test]
    fn labels_convert_into_new_variables() {
        let v: Var = "q".into();
        assert_eq!(v.label(), "q");
        assert_ne!(v, Var::detached());
    }

    #[test]
    fn debug_and_display_show_the_label() {
        let v = Var::new("q");
        assert_eq!(format!("{:?}", v), "q");
        assert_eq!(v.to_string(), "#<Var: q>");
    }
}
