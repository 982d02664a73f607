use super::{implies, Alphabet, Atom, Formula, Literal, Operand};
use itertools::Itertools;
use std::{
    collections::{btree_set, BTreeSet},
    fmt::Display,
};

/// A conditional assertion "given the antecedent, normally the consequent".
///
/// A conditional is classical when its consequent is `⊥`: `A |~ ⊥` states that `A` never happens,
/// which is how strict rules are stored (see [`Normally::classical`]).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Normally {
    antecedent: Formula,
    consequent: Formula,
}

impl Normally {
    /// Builds a new conditional assertion.
    pub fn new(antecedent: Formula, consequent: Formula) -> Self {
        Self {
            antecedent,
            consequent,
        }
    }

    /// Builds the classical conditional stating that a formula holds without exception.
    ///
    /// The conditional is `¬φ |~ ⊥`, and its materialization is `φ` again.
    pub fn classical<O>(formula: O) -> Self
    where
        O: Into<Operand>,
    {
        Self::new(formula.into().into_formula().negate(), Formula::bot())
    }

    /// Returns the antecedent of the conditional.
    pub fn antecedent(&self) -> &Formula {
        &self.antecedent
    }

    /// Returns the consequent of the conditional.
    pub fn consequent(&self) -> &Formula {
        &self.consequent
    }

    /// Returns `true` iff this conditional tolerates no exception, i.e. its consequent is `⊥`.
    pub fn is_classical(&self) -> bool {
        self.consequent.is_bot()
    }

    /// Returns the strict reading of this conditional as a plain formula.
    ///
    /// A classical conditional `A |~ ⊥` becomes `¬A`, which simplifies `(φ → ⊥) |~ ⊥` back to `φ`.
    /// Any other conditional `A |~ B` becomes the implication `A → B`.
    pub fn materialize(&self) -> Formula {
        if self.is_classical() {
            self.antecedent.negate()
        } else {
            implies(self.antecedent.clone(), self.consequent.clone())
        }
    }

    /// Returns the literals occurring in the antecedent or in the consequent.
    pub fn literals(&self) -> BTreeSet<Literal> {
        let mut literals = self.antecedent.literals();
        literals.append(&mut self.consequent.literals());
        literals
    }

    /// Returns the atoms occurring in the antecedent or in the consequent.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = self.antecedent.atoms();
        atoms.append(&mut self.consequent.atoms());
        atoms
    }
}

impl Display for Normally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_classical() && self.antecedent.is_exceptional() {
            return write!(f, "{}", self.antecedent.left().clone().into_formula());
        }
        write!(f, "{} |~ {}", self.antecedent, self.consequent)
    }
}

/// Builds the conditional "given `antecedent`, normally `consequent`".
///
/// Literals are lifted into single-node formulas.
pub fn normally<A, C>(antecedent: A, consequent: C) -> Normally
where
    A: Into<Operand>,
    C: Into<Operand>,
{
    Normally::new(
        antecedent.into().into_formula(),
        consequent.into().into_formula(),
    )
}

/// A set of conditional assertions.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KnowledgeBase(BTreeSet<Normally>);

impl KnowledgeBase {
    /// Builds a knowledge base from a collection of conditionals, removing duplicates.
    pub fn new<I>(statements: I) -> Self
    where
        I: IntoIterator<Item = Normally>,
    {
        Self(statements.into_iter().collect())
    }

    /// Returns the number of conditionals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` iff the knowledge base contains no conditional.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` iff the conditional belongs to the knowledge base.
    pub fn contains(&self, statement: &Normally) -> bool {
        self.0.contains(statement)
    }

    /// Iterates over the conditionals in a deterministic order.
    pub fn iter(&self) -> btree_set::Iter<'_, Normally> {
        self.0.iter()
    }

    /// Returns `true` iff every conditional of this knowledge base belongs to the other one.
    pub fn is_subset(&self, other: &KnowledgeBase) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns the conditionals that belong to either knowledge base.
    pub fn union(&self, other: &KnowledgeBase) -> KnowledgeBase {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Returns the conditionals of this knowledge base that do not belong to the other one.
    pub fn difference(&self, other: &KnowledgeBase) -> KnowledgeBase {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Returns the atoms occurring in the conditionals.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.0.iter().flat_map(Normally::atoms).collect()
    }

    /// Returns the alphabet made of the atoms occurring in the conditionals.
    pub fn alphabet(&self) -> Alphabet {
        self.0.iter().flat_map(Normally::atoms).collect()
    }

    /// Returns the strict readings of the conditionals.
    pub fn materialized(&self) -> BTreeSet<Formula> {
        self.0.iter().map(Normally::materialize).collect()
    }

    /// Splits the knowledge base into its classical and its defeasible conditionals, in this order.
    pub fn separate(&self) -> (KnowledgeBase, KnowledgeBase) {
        let (classical, defeasible): (BTreeSet<Normally>, BTreeSet<Normally>) =
            self.0.iter().cloned().partition(Normally::is_classical);
        (Self(classical), Self(defeasible))
    }
}

impl FromIterator<Normally> for KnowledgeBase {
    fn from_iter<T: IntoIterator<Item = Normally>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a Normally;
    type IntoIter = btree_set::Iter<'a, Normally>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for KnowledgeBase {
    type Item = Normally;
    type IntoIter = btree_set::IntoIter<Normally>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ {} }}", self.0.iter().join(", "))
    }
}
