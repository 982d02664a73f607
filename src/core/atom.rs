use std::{fmt::Display, rc::Rc};

pub(crate) const TOP_SYMBOL: &str = "⊤";
pub(crate) const BOT_SYMBOL: &str = "⊥";

/// A propositional atom, identified by its symbol.
///
/// Atoms are ordered and compared by their symbols.
/// Cloning an atom is cheap since the symbol is shared.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(Rc<str>);

impl Atom {
    /// Builds an atom from its symbol.
    pub fn new(symbol: &str) -> Self {
        Self(Rc::from(symbol))
    }

    /// Returns the symbol of this atom.
    pub fn symbol(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_reserved(&self) -> bool {
        &*self.0 == TOP_SYMBOL || &*self.0 == BOT_SYMBOL
    }
}

impl From<&str> for Atom {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A literal, that is a signed atom or one of the constants `⊤` and `⊥`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Literal {
    /// An atom with its polarity (`true` for a positive literal).
    Atom {
        /// The underlying atom.
        atom: Atom,
        /// The polarity of the literal.
        sign: bool,
    },
    /// The constant true.
    Top,
    /// The constant false.
    Bot,
}

impl Literal {
    /// Builds a literal from an atom and a polarity.
    ///
    /// The reserved symbols `⊤` and `⊥` give the corresponding constants, so that `¬⊤` is `⊥`.
    pub fn new(atom: Atom, sign: bool) -> Self {
        if !atom.is_reserved() {
            return Literal::Atom { atom, sign };
        }
        if (atom.symbol() == TOP_SYMBOL) == sign {
            Literal::Top
        } else {
            Literal::Bot
        }
    }

    /// Builds the positive literal of an atom.
    pub fn positive(atom: Atom) -> Self {
        Self::new(atom, true)
    }

    /// Builds the negative literal of an atom.
    pub fn negative(atom: Atom) -> Self {
        Self::new(atom, false)
    }

    /// Returns the atom of this literal.
    ///
    /// The constants report the sentinel atoms `⊤` and `⊥`.
    pub fn atom(&self) -> Atom {
        match self {
            Literal::Atom { atom, .. } => atom.clone(),
            Literal::Top => Atom::new(TOP_SYMBOL),
            Literal::Bot => Atom::new(BOT_SYMBOL),
        }
    }

    /// Returns the polarity of this literal.
    ///
    /// `⊤` is positive and `⊥` is negative.
    pub fn sign(&self) -> bool {
        match self {
            Literal::Atom { sign, .. } => *sign,
            Literal::Top => true,
            Literal::Bot => false,
        }
    }

    /// Returns `true` iff this literal is one of the constants.
    pub fn is_constant(&self) -> bool {
        matches!(self, Literal::Top | Literal::Bot)
    }

    /// Returns the complementary literal.
    pub fn negate(&self) -> Self {
        match self {
            Literal::Atom { atom, sign } => Literal::new(atom.clone(), !sign),
            Literal::Top => Literal::Bot,
            Literal::Bot => Literal::Top,
        }
    }

    /// Computes the truth value of this literal given the values of the atoms.
    ///
    /// `atom_value` is only queried for general literals and must report unassigned atoms as `false`.
    pub(crate) fn evaluate_with<F>(&self, atom_value: &F) -> bool
    where
        F: Fn(&Atom) -> bool,
    {
        match self {
            Literal::Atom { atom, sign } => atom_value(atom) == *sign,
            Literal::Top => true,
            Literal::Bot => false,
        }
    }
}

impl From<Atom> for Literal {
    fn from(atom: Atom) -> Self {
        Literal::positive(atom)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Atom { atom, sign: true } => write!(f, "{}", atom),
            Literal::Atom { atom, sign: false } => write!(f, "¬{}", atom),
            Literal::Top => write!(f, "{}", TOP_SYMBOL),
            Literal::Bot => write!(f, "{}", BOT_SYMBOL),
        }
    }
}
