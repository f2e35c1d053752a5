use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::formula::{Atom, AtomId};

/// Spellings of the reserved atoms.
pub const RESERVED_NAMES: [(&str, AtomId); 3] = [
    ("0", AtomId::EMPTYSET),
    ("∅", AtomId::EMPTYSET),
    ("U", AtomId::UNIVERSE),
];

/// Dictionary translating atom names into unique identifiers.
///
/// Fresh identifiers are handed out in first-seen order, starting at 0, so the
/// `i`-th distinct name always gets identifier `i` regardless of its spelling.
#[derive(Debug, Clone)]
pub struct AtomDict {
    map: HashMap<String, AtomId>,
    // Reverse mapping: `names[i]` is the name of the atom with identifier `i`.
    names: Vec<String>,
}

impl AtomDict {
    pub fn new() -> Self {
        let map = RESERVED_NAMES
            .iter()
            .map(|&(name, id)| (name.to_string(), id))
            .collect();
        Self { map, names: Vec::new() }
    }
}

impl Default for AtomDict {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomDict {
    /// Number of distinct ordinary atoms seen so far.
    pub fn number_of_atoms(&self) -> usize {
        self.names.len()
    }

    /// Returns the identifier of `name`, assigning the next fresh one if `name` is new.
    pub fn atom_id(&mut self, name: &str) -> AtomId {
        if let Some(&id) = self.map.get(name) {
            return id;
        }
        let id = AtomId::from(self.names.len());
        debug!("New atom '{}' -> {}", name, id);
        self.map.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    /// Creates an atom with the correct unique identifier from its name.
    pub fn atom(&mut self, name: &str) -> Atom {
        let id = self.atom_id(name);
        Atom::new(id, name)
    }

    /// Identifier of an already known `name`, without assigning a new one.
    pub fn get(&self, name: &str) -> Option<AtomId> {
        self.map.get(name).copied()
    }

    /// Name of the ordinary atom with identifier `id`.
    pub fn name(&self, id: AtomId) -> Option<&str> {
        id.index().and_then(|i| self.names.get(i)).map(String::as_str)
    }

    /// Names of the ordinary atoms, ordered by identifier.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Display for AtomDict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.names.iter().enumerate().map(|(i, name)| format!("{name}: {i}")).join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use super::*;

    #[test]
    fn test_fresh_ids_in_first_seen_order() {
        let mut dict = AtomDict::new();
        assert_eq!(dict.atom_id("B"), AtomId::new(0));
        assert_eq!(dict.atom_id("A"), AtomId::new(1));
        assert_eq!(dict.atom_id("B"), AtomId::new(0));
        assert_eq!(dict.atom_id("C1"), AtomId::new(2));
        assert_eq!(dict.number_of_atoms(), 3);
        assert_eq!(dict.names(), ["B", "A", "C1"]);
        assert_eq!(dict.to_string(), "{B: 0, A: 1, C1: 2}");
    }

    #[test]
    fn test_reserved_names_do_not_consume_ids() {
        let mut dict = AtomDict::new();
        assert_eq!(dict.atom_id("U"), AtomId::UNIVERSE);
        assert_eq!(dict.atom_id("0"), AtomId::EMPTYSET);
        assert_eq!(dict.atom_id("∅"), AtomId::EMPTYSET);
        assert_eq!(dict.number_of_atoms(), 0);
        assert_eq!(dict.atom_id("X"), AtomId::new(0));
    }

    #[test]
    fn test_reverse_lookup() {
        let mut dict = AtomDict::new();
        let atom = dict.atom("Foo");
        assert_eq!(atom, Atom::new(AtomId::new(0), "Foo"));
        assert_eq!(dict.name(atom.id), Some("Foo"));
        assert_eq!(dict.name(AtomId::UNIVERSE), None);
        assert_eq!(dict.get("Foo"), Some(AtomId::new(0)));
        assert_eq!(dict.get("Bar"), None);
    }

    // Identifiers depend only on first-occurrence order, not on the spelling.
    #[quickcheck]
    fn ids_follow_first_occurrence(names: Vec<String>) -> bool {
        let mut dict = AtomDict::new();
        let mut seen: Vec<&str> = Vec::new();
        for name in names.iter() {
            let id = dict.atom_id(name);
            if let Some((_, reserved)) = RESERVED_NAMES.iter().find(|(r, _)| *r == name.as_str()) {
                if id != *reserved {
                    return false;
                }
                continue;
            }
            let expected = match seen.iter().position(|s| *s == name.as_str()) {
                Some(i) => i,
                None => {
                    seen.push(name.as_str());
                    seen.len() - 1
                }
            };
            if id != AtomId::from(expected) {
                return false;
            }
        }
        dict.number_of_atoms() == seen.len()
    }

    // Every identifier maps back to the name it was assigned for.
    #[quickcheck]
    fn dict_is_bijective(names: Vec<String>) -> bool {
        let mut dict = AtomDict::new();
        for name in names.iter() {
            dict.atom_id(name);
        }
        dict.names()
            .iter()
            .enumerate()
            .all(|(i, name)| dict.get(name) == Some(AtomId::from(i)) && dict.name(AtomId::from(i)) == Some(name.as_str()))
    }
}
