use std::fmt::{Display, Formatter};

use derive_more::Deref;
use itertools::Itertools;

/// Truth value of every ordinary atom, indexed by atom identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct Valuation(Vec<bool>);

impl Valuation {
    pub fn new(data: Vec<bool>) -> Self {
        Self(data)
    }

    /// First valuation in enumeration order.
    pub fn all_true(n: usize) -> Self {
        Self(vec![true; n])
    }

    /// Steps to the next valuation in enumeration order.
    ///
    /// Position 0 changes fastest and each position takes `true` before
    /// `false`. Returns `false` when the last valuation (all `false`) has been
    /// passed, in which case `self` wraps around to all `true`.
    pub fn advance(&mut self) -> bool {
        advance(&mut self.0)
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl From<Vec<bool>> for Valuation {
    fn from(data: Vec<bool>) -> Self {
        Self::new(data)
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|&x| if x { "1" } else { "0" }).join(""))
    }
}

/// In-place step of a raw valuation buffer, see [`Valuation::advance`].
pub fn advance(values: &mut [bool]) -> bool {
    for value in values.iter_mut() {
        if *value {
            *value = false;
            return true;
        }
        *value = true;
    }
    false
}

/// Iterator over all `2^n` valuations of `n` atoms, see [`Valuation::advance`].
#[derive(Debug, Clone)]
pub struct Valuations {
    next: Option<Valuation>,
}

impl Iterator for Valuations {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if following.advance() {
            self.next = Some(following);
        }
        Some(current)
    }
}

pub fn all_valuations(n: usize) -> Valuations {
    Valuations {
        next: Some(Valuation::all_true(n)),
    }
}
