use super::{Atom, Literal, Valuation};
use std::{collections::BTreeSet, fmt::Display};
use thiserror::Error;

/// The errors raised while building formulas.
///
/// Both kinds denote a programming error on the caller side.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    /// A connective was given without a right child, or conversely.
    #[error("malformed formula: {0}")]
    MalformedFormula(&'static str),

    /// An operand cannot appear in a formula.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),
}

/// The binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Connective {
    /// The conjunction.
    And,
    /// The disjunction.
    Or,
    /// The material implication.
    Implies,
}

impl Connective {
    /// Applies the truth table of the connective.
    pub fn evaluate(&self, left: bool, right: bool) -> bool {
        match self {
            Connective::And => left && right,
            Connective::Or => left || right,
            Connective::Implies => !left || right,
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connective::And => write!(f, "∧"),
            Connective::Or => write!(f, "∨"),
            Connective::Implies => write!(f, "→"),
        }
    }
}

/// The left child of a formula node: either a literal or a subformula.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operand {
    /// A literal.
    Literal(Literal),
    /// A subformula.
    Formula(Box<Formula>),
}

impl Operand {
    /// Lifts this operand into a formula.
    ///
    /// A literal becomes a single-node formula; a subformula is returned as is.
    pub fn into_formula(self) -> Formula {
        match self {
            Operand::Literal(l) => Formula::leaf(l),
            Operand::Formula(f) => *f,
        }
    }

    fn negate(&self) -> Self {
        match self {
            Operand::Literal(l) => Operand::Literal(l.negate()),
            Operand::Formula(f) => Operand::Formula(Box::new(f.negate())),
        }
    }

    fn evaluate_with<F>(&self, atom_value: &F) -> bool
    where
        F: Fn(&Atom) -> bool,
    {
        match self {
            Operand::Literal(l) => l.evaluate_with(atom_value),
            Operand::Formula(f) => f.evaluate_with(atom_value),
        }
    }

    fn collect_literals(&self, literals: &mut BTreeSet<Literal>) {
        match self {
            Operand::Literal(l) if !l.is_constant() => {
                literals.insert(l.clone());
            }
            Operand::Literal(_) => {}
            Operand::Formula(f) => f.collect_literals(literals),
        }
    }
}

impl From<Literal> for Operand {
    fn from(literal: Literal) -> Self {
        Operand::Literal(literal)
    }
}

impl From<Atom> for Operand {
    fn from(atom: Atom) -> Self {
        Operand::Literal(Literal::positive(atom))
    }
}

impl From<Formula> for Operand {
    fn from(formula: Formula) -> Self {
        Operand::Formula(Box::new(formula))
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Literal(l) => write!(f, "{}", l),
            Operand::Formula(formula) if formula.is_compound() => write!(f, "({})", formula),
            Operand::Formula(formula) => write!(f, "{}", formula),
        }
    }
}

/// A propositional formula, stored as a binary expression tree.
///
/// Each node holds a left operand and, optionally, a connective together with a right subformula.
/// A node without connective is a leaf which stands for its left operand.
///
/// The negation of a formula `F` which cannot be pushed down to the literals
/// (i.e. the negation of an implication) is encoded as `F → ⊥`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Formula {
    left: Operand,
    tail: Option<(Connective, Box<Formula>)>,
}

impl Formula {
    /// Builds a single-node formula from a literal.
    pub fn leaf(literal: Literal) -> Self {
        Self {
            left: Operand::Literal(literal),
            tail: None,
        }
    }

    /// Returns the single-node formula `⊤`.
    pub fn top() -> Self {
        Self::leaf(Literal::Top)
    }

    /// Returns the single-node formula `⊥`.
    pub fn bot() -> Self {
        Self::leaf(Literal::Bot)
    }

    /// Builds a formula from its parts.
    ///
    /// The connective and the right child must be both present or both absent.
    /// A literal given as the right child is lifted into a single-node formula.
    /// [`Literal::new`] turns the reserved symbols `⊤` and `⊥` into constants, but the [`Literal::Atom`] variant
    /// can still be built on them by hand; such literals are rejected.
    pub fn from_parts(
        left: Operand,
        connective: Option<Connective>,
        right: Option<Operand>,
    ) -> Result<Self, FormulaError> {
        let tail = match (connective, right) {
            (None, None) => None,
            (Some(c), Some(r)) => Some((c, Box::new(r.into_formula()))),
            (Some(_), None) => {
                return Err(FormulaError::MalformedFormula(
                    "connective present, despite right child missing",
                ))
            }
            (None, Some(_)) => {
                return Err(FormulaError::MalformedFormula(
                    "connective missing, despite right child present",
                ))
            }
        };
        let formula = Self { left, tail };
        let mut literals = BTreeSet::new();
        formula.collect_literals(&mut literals);
        if let Some(l) = literals.iter().find(|l| l.atom().is_reserved()) {
            return Err(FormulaError::InvalidOperand(format!(
                r#"literal "{}" uses a reserved symbol"#,
                l
            )));
        }
        Ok(formula)
    }

    fn node(left: Operand, connective: Connective, right: Formula) -> Self {
        Self {
            left,
            tail: Some((connective, Box::new(right))),
        }
    }

    /// Returns the left operand of the root node.
    pub fn left(&self) -> &Operand {
        &self.left
    }

    /// Returns the connective of the root node, if any.
    pub fn connective(&self) -> Option<Connective> {
        self.tail.as_ref().map(|(c, _)| *c)
    }

    /// Returns the right child of the root node, if any.
    pub fn right(&self) -> Option<&Formula> {
        self.tail.as_ref().map(|(_, r)| r.as_ref())
    }

    /// Returns `true` iff the root node has a connective.
    pub fn is_compound(&self) -> bool {
        self.tail.is_some()
    }

    /// Returns `true` iff this formula is the single-node formula `⊥`.
    pub fn is_bot(&self) -> bool {
        self.tail.is_none() && self.left == Operand::Literal(Literal::Bot)
    }

    /// Returns `true` iff this formula has the shape `F → ⊥` used to encode `¬F`.
    pub fn is_exceptional(&self) -> bool {
        matches!(&self.tail, Some((Connective::Implies, r)) if r.is_bot())
    }

    /// Computes the truth value of the formula under a valuation.
    ///
    /// Atoms the valuation does not assign are considered false.
    pub fn evaluate(&self, valuation: &Valuation) -> bool {
        self.evaluate_with(&|a: &Atom| valuation.value(a))
    }

    pub(crate) fn evaluate_with<F>(&self, atom_value: &F) -> bool
    where
        F: Fn(&Atom) -> bool,
    {
        let left = self.left.evaluate_with(atom_value);
        match &self.tail {
            None => left,
            Some((c, r)) => c.evaluate(left, r.evaluate_with(atom_value)),
        }
    }

    /// Returns the literals occurring in this formula, constants excluded.
    pub fn literals(&self) -> BTreeSet<Literal> {
        let mut literals = BTreeSet::new();
        self.collect_literals(&mut literals);
        literals
    }

    fn collect_literals(&self, literals: &mut BTreeSet<Literal>) {
        self.left.collect_literals(literals);
        if let Some((_, r)) = &self.tail {
            r.collect_literals(literals);
        }
    }

    /// Returns the atoms occurring in this formula, constants excluded.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.literals().iter().map(Literal::atom).collect()
    }

    /// Returns the negation of this formula.
    ///
    /// Negations are pushed through conjunctions and disjunctions following De Morgan's laws.
    /// The negation of an implication `A → B` is `(A → B) → ⊥`, except if `B` is `⊥`, in which case it is `A`.
    pub fn negate(&self) -> Self {
        match &self.tail {
            None => Self {
                left: self.left.negate(),
                tail: None,
            },
            Some((Connective::And, r)) => Self::node(self.left.negate(), Connective::Or, r.negate()),
            Some((Connective::Or, r)) => Self::node(self.left.negate(), Connective::And, r.negate()),
            Some((Connective::Implies, r)) if r.is_bot() => self.left.clone().into_formula(),
            Some((Connective::Implies, _)) => {
                Self::node(Operand::from(self.clone()), Connective::Implies, Self::bot())
            }
        }
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        Self::leaf(literal)
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Self::leaf(Literal::positive(atom))
    }
}

impl From<Operand> for Formula {
    fn from(operand: Operand) -> Self {
        operand.into_formula()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tail {
            None => write!(f, "{}", self.left),
            Some((Connective::Implies, r)) if r.is_bot() => match &self.left {
                Operand::Formula(inner) => write!(f, "¬({})", inner),
                Operand::Literal(l) => write!(f, "¬({})", l),
            },
            Some((c, r)) if r.is_compound() => write!(f, "{} {} ({})", self.left, c, r),
            Some((c, r)) => write!(f, "{} {} {}", self.left, c, r),
        }
    }
}

/// Builds the conjunction of two operands.
///
/// A constant left literal simplifies the result: `⊤ ∧ B` is `B` and `⊥ ∧ B` is `⊥`.
pub fn and_<L, R>(left: L, right: R) -> Formula
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    match left.into() {
        Operand::Literal(Literal::Top) => right.into().into_formula(),
        Operand::Literal(Literal::Bot) => Formula::bot(),
        l => Formula::node(l.into_formula().into(), Connective::And, right.into().into_formula()),
    }
}

/// Builds the disjunction of two operands.
///
/// A constant left literal simplifies the result: `⊤ ∨ B` is `⊤` and `⊥ ∨ B` is `B`.
pub fn or_<L, R>(left: L, right: R) -> Formula
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    match left.into() {
        Operand::Literal(Literal::Top) => Formula::top(),
        Operand::Literal(Literal::Bot) => right.into().into_formula(),
        l => Formula::node(l.into_formula().into(), Connective::Or, right.into().into_formula()),
    }
}

/// Builds the implication between two operands.
pub fn implies<L, R>(left: L, right: R) -> Formula
where
    L: Into<Operand>,
    R: Into<Operand>,
{
    Formula::node(
        left.into().into_formula().into(),
        Connective::Implies,
        right.into().into_formula(),
    )
}

/// Builds the negation of an operand.
pub fn negate<O>(operand: O) -> Formula
where
    O: Into<Operand>,
{
    operand.into().into_formula().negate()
}
