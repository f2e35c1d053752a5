use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use log::trace;
use tap::Tap;

use crate::formula::atom::{Atom, AtomId};
use crate::formula::conn::Conn;

/// Formula of set algebra: an atom, or two sub-formulas joined by a connective.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(Atom),
    Bin { lhs: Box<Formula>, conn: Conn, rhs: Box<Formula> },
}

// Constructors
impl Formula {
    pub fn atom(id: AtomId, name: impl Into<String>) -> Self {
        Formula::Atom(Atom::new(id, name))
    }

    pub fn bin(lhs: Self, conn: Conn, rhs: Self) -> Self {
        Formula::Bin {
            lhs: Box::new(lhs),
            conn,
            rhs: Box::new(rhs),
        }
    }

    pub fn empty_set() -> Self {
        Formula::Atom(Atom::empty_set())
    }

    pub fn universe() -> Self {
        Formula::Atom(Atom::universe())
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            match self {
                Formula::Atom(atom) => {
                    write!(f, "{atom:#}")
                }
                Formula::Bin { lhs, conn, rhs } => {
                    write!(f, "({lhs:#} {conn:#} {rhs:#})")
                }
            }
        } else {
            match self {
                Formula::Atom(atom) => {
                    write!(f, "{atom}")
                }
                Formula::Bin { lhs, conn, rhs } => {
                    write!(f, "({lhs} {conn} {rhs})")
                }
            }
        }
    }
}

impl Formula {
    /// Evaluates the formula under `valuation`, indexed by atom identifier.
    ///
    /// # Panics
    ///
    /// Panics if some ordinary atom of the formula has no entry in `valuation`.
    pub fn eval(&self, valuation: &[bool]) -> bool {
        match self {
            Formula::Atom(atom) => atom.eval(valuation),
            Formula::Bin { lhs, conn, rhs } => {
                let l = lhs.eval(valuation);
                let r = rhs.eval(valuation);
                conn.apply(l, r)
            }
        }
        .tap(|x| trace!("eval({self}) = {x}"))
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) => 1,
            Formula::Bin { lhs, rhs, .. } => 1 + lhs.size() + rhs.size(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Bin { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Distinct ordinary atom identifiers occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<AtomId> {
        fn collect(formula: &Formula, acc: &mut BTreeSet<AtomId>) {
            match formula {
                Formula::Atom(atom) => {
                    if !atom.id.is_reserved() {
                        acc.insert(atom.id);
                    }
                }
                Formula::Bin { lhs, rhs, .. } => {
                    collect(lhs, acc);
                    collect(rhs, acc);
                }
            }
        }

        let mut acc = BTreeSet::new();
        collect(self, &mut acc);
        acc
    }
}
