use std::fmt::Display;

mod justifications;
pub use justifications::justifications;

mod ranked_model;
pub use ranked_model::minimal_ranked_model;
pub use ranked_model::valuation_in_min;
pub use ranked_model::violates_statement;
pub use ranked_model::RankedModel;

mod statement_ranking;
pub use statement_ranking::statement_ranking;
pub use statement_ranking::StatementRanking;

/// A normality rank: lower ranks are more normal.
///
/// Infinite ranks are given to the valuations (resp. conditionals) that are never normal,
/// and are greater than every finite rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// A finite rank.
    Finite(usize),
    /// The infinite rank.
    Infinite,
}

impl Rank {
    /// Returns `true` iff the rank is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Rank::Finite(_))
    }

    /// Returns the value of a finite rank, or `None` for the infinite one.
    pub fn finite(&self) -> Option<usize> {
        match self {
            Rank::Finite(n) => Some(*n),
            Rank::Infinite => None,
        }
    }
}

impl From<usize> for Rank {
    fn from(n: usize) -> Self {
        Rank::Finite(n)
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Finite(n) => write!(f, "{}", n),
            Rank::Infinite => write!(f, "∞"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Rank::Finite(0) < Rank::Finite(1));
        assert!(Rank::Finite(usize::MAX) < Rank::Infinite);
        assert_eq!(Some(3), Rank::from(3).finite());
        assert_eq!(None, Rank::Infinite.finite());
    }

    #[test]
    fn test_rank_display() {
        assert_eq!("2", format!("{}", Rank::Finite(2)));
        assert_eq!("∞", format!("{}", Rank::Infinite));
    }
}
