use super::Rank;
use crate::{entails, KnowledgeBase, Normally};
use log::{debug, info};
use std::collections::{btree_map, BTreeMap};

/// A stratification of a knowledge base by exceptionality.
///
/// Each conditional of the knowledge base belongs to exactly one rank.
/// The infinite rank is always present, and holds the conditionals which are exceptional at every level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementRanking(BTreeMap<Rank, KnowledgeBase>);

impl StatementRanking {
    /// Returns the conditionals of a given rank, if this rank is used.
    pub fn get(&self, rank: Rank) -> Option<&KnowledgeBase> {
        self.0.get(&rank)
    }

    /// Returns the conditionals of infinite rank.
    pub fn infinite(&self) -> &KnowledgeBase {
        &self.0[&Rank::Infinite]
    }

    /// Returns the rank of a conditional, or `None` if it does not belong to the ranked knowledge base.
    pub fn rank_of(&self, statement: &Normally) -> Option<Rank> {
        self.0
            .iter()
            .find(|(_, statements)| statements.contains(statement))
            .map(|(rank, _)| *rank)
    }

    /// Returns the number of finite ranks.
    pub fn n_finite_ranks(&self) -> usize {
        self.0.len() - 1
    }

    /// Iterates over the ranks and their conditionals, in increasing rank order.
    pub fn iter(&self) -> btree_map::Iter<'_, Rank, KnowledgeBase> {
        self.0.iter()
    }
}

/// Computes the System Z ranking of the conditionals of a knowledge base.
///
/// Starting from `E_0`, the whole knowledge base, `E_{i+1}` is made of the conditionals of `E_i`
/// whose antecedent is refuted by the strict reading of `E_i`.
/// The conditionals of `E_i \ E_{i+1}` receive the rank `i`; once a fixed point is reached,
/// the remaining conditionals receive the infinite rank.
pub fn statement_ranking(knowledge_base: &KnowledgeBase) -> StatementRanking {
    let mut ranking = BTreeMap::new();
    let mut current = knowledge_base.clone();
    let mut level = 0;
    loop {
        let materialized = current.materialized();
        let exceptional = current
            .iter()
            .filter(|s| entails(&materialized, &s.antecedent().negate()))
            .cloned()
            .collect::<KnowledgeBase>();
        debug!(
            "level {}: {} conditionals, {} exceptional",
            level,
            current.len(),
            exceptional.len()
        );
        if exceptional == current {
            break;
        }
        ranking.insert(Rank::Finite(level), current.difference(&exceptional));
        current = exceptional;
        level += 1;
    }
    info!(
        "statement ranking has {} finite ranks and {} conditionals of infinite rank",
        level,
        current.len()
    );
    ranking.insert(Rank::Infinite, current);
    StatementRanking(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{and_, implies, normally, Atom, Literal};

    fn lit(s: &str) -> Literal {
        Literal::positive(Atom::new(s))
    }

    fn penguins() -> KnowledgeBase {
        KnowledgeBase::new([
            normally(lit("b"), lit("f")),
            normally(lit("p"), lit("b")),
            normally(lit("p"), lit("f").negate()),
        ])
    }

    fn assert_partition(kb: &KnowledgeBase, ranking: &StatementRanking) {
        let mut union = KnowledgeBase::default();
        let mut total = 0;
        for (_, statements) in ranking.iter() {
            union = union.union(statements);
            total += statements.len();
        }
        assert_eq!(kb, &union);
        assert_eq!(kb.len(), total);
    }

    #[test]
    fn test_single_rule() {
        let kb = KnowledgeBase::new([normally(lit("a"), lit("b"))]);
        let ranking = statement_ranking(&kb);
        assert_eq!(Some(&kb), ranking.get(Rank::Finite(0)));
        assert!(ranking.infinite().is_empty());
        assert_eq!(1, ranking.n_finite_ranks());
        assert_partition(&kb, &ranking);
    }

    #[test]
    fn test_empty_knowledge_base() {
        let kb = KnowledgeBase::default();
        let ranking = statement_ranking(&kb);
        assert_eq!(1, ranking.iter().count());
        assert!(ranking.infinite().is_empty());
        assert_eq!(0, ranking.n_finite_ranks());
    }

    #[test]
    fn test_penguins() {
        let kb = penguins();
        let ranking = statement_ranking(&kb);
        assert_eq!(
            Some(Rank::Finite(0)),
            ranking.rank_of(&normally(lit("b"), lit("f")))
        );
        assert_eq!(
            Some(Rank::Finite(1)),
            ranking.rank_of(&normally(lit("p"), lit("b")))
        );
        assert_eq!(
            Some(Rank::Finite(1)),
            ranking.rank_of(&normally(lit("p"), lit("f").negate()))
        );
        assert!(ranking.infinite().is_empty());
        assert_partition(&kb, &ranking);
    }

    #[test]
    fn test_contradictory_antecedent_is_infinite() {
        let kb = KnowledgeBase::new([
            normally(lit("a"), lit("b")),
            normally(lit("a"), lit("b").negate()),
            normally(lit("c"), lit("d")),
        ]);
        let ranking = statement_ranking(&kb);
        assert_eq!(
            Some(&KnowledgeBase::new([normally(lit("c"), lit("d"))])),
            ranking.get(Rank::Finite(0))
        );
        assert_eq!(2, ranking.infinite().len());
        assert_eq!(None, ranking.rank_of(&normally(lit("x"), lit("y"))));
        assert_partition(&kb, &ranking);
    }

    #[test]
    fn test_classical_rules_share_the_infinite_rank() {
        let strict = Normally::classical(implies(lit("p"), lit("q")));
        let kb = KnowledgeBase::new([strict.clone(), normally(and_(lit("p"), lit("r")), lit("s"))]);
        let ranking = statement_ranking(&kb);
        assert_eq!(Some(Rank::Infinite), ranking.rank_of(&strict));
        assert_partition(&kb, &ranking);
    }

    #[test]
    fn test_terminates_within_bound() {
        let kb = penguins();
        let ranking = statement_ranking(&kb);
        assert!(ranking.n_finite_ranks() <= kb.len());
    }
}
