use super::{Atom, Formula};
use itertools::Itertools;
use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// The maximal number of atoms an alphabet may contain.
///
/// Valuations are stored as 64-bits masks; enumerating the valuations of larger alphabets would not be tractable anyway.
pub const MAX_ALPHABET_SIZE: usize = 63;

/// A finite set of atoms with a stable order.
///
/// The position of an atom in the alphabet is the index of its bit in the valuations built on this alphabet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alphabet(Rc<[Atom]>);

impl Alphabet {
    /// Builds an alphabet from a collection of atoms.
    ///
    /// Atoms are sorted and duplicates are removed.
    ///
    /// # Panics
    ///
    /// In case the alphabet contains more than [`MAX_ALPHABET_SIZE`] atoms, this function panics.
    pub fn new<I>(atoms: I) -> Self
    where
        I: IntoIterator<Item = Atom>,
    {
        let atoms = atoms.into_iter().sorted_unstable().dedup().collect::<Vec<Atom>>();
        if atoms.len() > MAX_ALPHABET_SIZE {
            panic!(
                "alphabets are limited to {} atoms, got {}",
                MAX_ALPHABET_SIZE,
                atoms.len()
            );
        }
        Self(atoms.into())
    }

    /// Builds the alphabet made of the atoms occurring in some formulas.
    pub fn of_formulas<'a, I>(formulas: I) -> Self
    where
        I: IntoIterator<Item = &'a Formula>,
    {
        Self::new(formulas.into_iter().flat_map(|f| f.atoms()))
    }

    /// Returns the number of atoms in this alphabet.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff this alphabet contains no atom.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the atoms in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.0.iter()
    }

    /// Returns the index of an atom, or `None` if it does not belong to the alphabet.
    pub fn index_of(&self, atom: &Atom) -> Option<usize> {
        self.0.binary_search(atom).ok()
    }

    /// Returns `true` iff the atom belongs to the alphabet.
    pub fn contains(&self, atom: &Atom) -> bool {
        self.index_of(atom).is_some()
    }

    /// Returns the number of valuations of this alphabet, that is `2^n` for `n` atoms.
    pub fn n_valuations(&self) -> usize {
        1 << self.len()
    }

    fn full_mask(&self) -> u64 {
        (1 << self.len()) - 1
    }

    /// Enumerates the valuations of this alphabet, one per subset of atoms set to true.
    ///
    /// When `complete` is set, each valuation explicitly assigns all the atoms of the alphabet.
    /// Otherwise, only the atoms set to true are assigned; since unassigned atoms are false,
    /// both kinds of valuations are equal and evaluate formulas the same way.
    pub fn valuations(&self, complete: bool) -> Valuations {
        Valuations {
            alphabet: self.clone(),
            complete,
            next: 0,
            end: self.n_valuations() as u64,
        }
    }

    pub(crate) fn valuation_of_mask(&self, values: u64) -> Valuation {
        Valuation {
            alphabet: self.clone(),
            domain: self.full_mask(),
            values,
        }
    }
}

impl FromIterator<Atom> for Alphabet {
    fn from_iter<T: IntoIterator<Item = Atom>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// The iterator returned by [`Alphabet::valuations`].
#[derive(Clone, Debug)]
pub struct Valuations {
    alphabet: Alphabet,
    complete: bool,
    next: u64,
    end: u64,
}

impl Iterator for Valuations {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let values = self.next;
        self.next += 1;
        Some(Valuation {
            alphabet: self.alphabet.clone(),
            domain: if self.complete {
                self.alphabet.full_mask()
            } else {
                values
            },
            values,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Valuations {}

/// An assignment of truth values to the atoms of an alphabet.
///
/// Atoms which are not assigned, including the ones outside the alphabet, are considered false.
/// Two valuations on the same alphabet are equal iff they set the same atoms to true,
/// regardless of which false atoms are explicitly assigned.
#[derive(Clone, Debug)]
pub struct Valuation {
    alphabet: Alphabet,
    domain: u64,
    values: u64,
}

impl Valuation {
    /// Builds the complete valuation setting the given atoms to true and the other ones to false.
    ///
    /// # Panics
    ///
    /// In case one of the atoms does not belong to the alphabet, this function panics.
    pub fn new<I>(alphabet: &Alphabet, true_atoms: I) -> Self
    where
        I: IntoIterator<Item = Atom>,
    {
        let values = true_atoms.into_iter().fold(0, |acc, a| {
            let index = alphabet
                .index_of(&a)
                .unwrap_or_else(|| panic!(r#"atom "{}" is not in the alphabet"#, a));
            acc | (1 << index)
        });
        alphabet.valuation_of_mask(values)
    }

    /// Returns the alphabet this valuation is defined on.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the value explicitly assigned to an atom, if any.
    pub fn get(&self, atom: &Atom) -> Option<bool> {
        self.alphabet
            .index_of(atom)
            .filter(|&i| self.domain & (1 << i) != 0)
            .map(|i| self.values & (1 << i) != 0)
    }

    /// Returns the truth value of an atom, unassigned atoms being false.
    pub fn value(&self, atom: &Atom) -> bool {
        self.alphabet
            .index_of(atom)
            .map(|i| self.values & (1 << i) != 0)
            .unwrap_or(false)
    }

    /// Returns `true` iff every atom of the alphabet is explicitly assigned.
    pub fn is_complete(&self) -> bool {
        self.domain == self.alphabet.full_mask()
    }

    /// Returns `true` iff the formula holds under this valuation.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula.evaluate(self)
    }

    /// Iterates over the atoms set to true.
    pub fn true_atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.alphabet
            .iter()
            .enumerate()
            .filter(|(i, _)| self.values & (1 << *i) != 0)
            .map(|(_, a)| a)
    }

    /// Iterates over the atoms of the alphabet which are false.
    pub fn false_atoms(&self) -> impl Iterator<Item = &Atom> + '_ {
        self.alphabet
            .iter()
            .enumerate()
            .filter(|(i, _)| self.values & (1 << *i) == 0)
            .map(|(_, a)| a)
    }

    pub(crate) fn mask(&self) -> u64 {
        self.values
    }
}

impl PartialEq for Valuation {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.alphabet == other.alphabet
    }
}

impl Eq for Valuation {}

impl Hash for Valuation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alphabet.hash(state);
        self.values.hash(state);
    }
}

impl PartialOrd for Valuation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Valuation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.alphabet
            .cmp(&other.alphabet)
            .then(self.values.cmp(&other.values))
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ {} }} {{ {} }}",
            self.true_atoms().join(" "),
            self.false_atoms().join(" ")
        )
    }
}
