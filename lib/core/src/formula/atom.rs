use std::fmt::{Display, Formatter};

/// Identifier of an atom.
///
/// Ordinary set variables have non-negative identifiers, assigned in the order
/// in which their names are first seen. Two negative identifiers are reserved
/// for the empty set and the universe.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct AtomId(i32);

impl AtomId {
    /// Valid atom identifiers are `>= MIN`.
    pub const MIN: AtomId = AtomId(-2);
    pub const EMPTYSET: AtomId = AtomId(-2);
    pub const UNIVERSE: AtomId = AtomId(-1);

    pub const fn new(val: i32) -> Self {
        debug_assert!(val >= Self::MIN.0, "atom identifier must be >= -2");
        AtomId(val)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    pub const fn is_reserved(self) -> bool {
        self.0 < 0
    }

    /// Position of this atom inside a valuation, `None` for reserved atoms.
    pub const fn index(self) -> Option<usize> {
        if self.is_reserved() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl Display for AtomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl From<usize> for AtomId {
    fn from(index: usize) -> Self {
        Self::new(i32::try_from(index).unwrap_or_else(|_| panic!("Atom index {index} is out of range")))
    }
}

/// Set variable, or one of the two reserved sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub id: AtomId,
    /// Name used for printing. May be empty.
    pub name: String,
}

impl Atom {
    pub fn new(id: AtomId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// Atom with the default name `A<id>`.
    pub fn unnamed(id: AtomId) -> Self {
        Self::new(id, "")
    }

    pub fn empty_set() -> Self {
        Self::new(AtomId::EMPTYSET, "∅")
    }

    pub fn universe() -> Self {
        Self::new(AtomId::UNIVERSE, "U")
    }

    pub fn eval(&self, valuation: &[bool]) -> bool {
        match self.id {
            AtomId::EMPTYSET => false,
            AtomId::UNIVERSE => true,
            id => {
                let index = id.get() as usize;
                *valuation
                    .get(index)
                    .unwrap_or_else(|| panic!("Valuation of length {} does not contain atom {self}", valuation.len()))
            }
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.id {
            AtomId::EMPTYSET => {
                if f.alternate() {
                    write!(f, "0")
                } else {
                    write!(f, "∅")
                }
            }
            AtomId::UNIVERSE => write!(f, "U"),
            id => {
                if self.name.is_empty() {
                    write!(f, "A{id}")
                } else {
                    write!(f, "{}", self.name)
                }
            }
        }
    }
}
