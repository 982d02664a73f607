use super::Rank;
use crate::{Alphabet, Formula, KnowledgeBase, Normally, Valuation};
use log::{debug, info};
use rustc_hash::FxHashSet;

/// An assignment of a normality rank to each valuation of an alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedModel {
    alphabet: Alphabet,
    valuations: Vec<Valuation>,
    ranks: Vec<Rank>,
}

impl RankedModel {
    fn new_flat(alphabet: Alphabet) -> Self {
        let valuations = alphabet.valuations(true).collect::<Vec<Valuation>>();
        let ranks = vec![Rank::Finite(0); valuations.len()];
        Self {
            alphabet,
            valuations,
            ranks,
        }
    }

    /// Returns the alphabet of the valuations.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the number of ranked valuations.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` iff the model ranks no valuation, which never happens since the empty alphabet has a valuation.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns the rank of a valuation, or `None` if the valuation is not defined on the alphabet of this model.
    pub fn rank(&self, valuation: &Valuation) -> Option<Rank> {
        if valuation.alphabet() != &self.alphabet {
            return None;
        }
        Some(self.ranks[valuation.mask() as usize])
    }

    /// Iterates over the valuations and their ranks.
    pub fn iter(&self) -> impl Iterator<Item = (&Valuation, Rank)> + '_ {
        self.valuations.iter().zip(self.ranks.iter().copied())
    }

    /// Iterates over the valuations of a given rank.
    pub fn valuations_of_rank(&self, rank: Rank) -> impl Iterator<Item = &Valuation> + '_ {
        self.iter().filter(move |(_, r)| *r == rank).map(|(v, _)| v)
    }

    /// Returns the highest finite rank given to a valuation, if any.
    pub fn max_finite_rank(&self) -> Option<usize> {
        self.ranks.iter().filter_map(Rank::finite).max()
    }

    /// Returns `true` iff some valuation has an infinite rank.
    pub fn has_infinite_rank(&self) -> bool {
        self.ranks.contains(&Rank::Infinite)
    }

    fn rank_at(&self, index: usize) -> Rank {
        self.ranks[index]
    }

    fn is_in_min(&self, antecedent: &Formula, index: usize) -> bool {
        let rank = self.rank_at(index);
        !self.iter().any(|(v, r)| r < rank && antecedent.evaluate(v))
    }
}

/// Returns `true` iff no valuation of a strictly lower rank satisfies the antecedent.
///
/// Valuations which are not ranked by the model are never minimal.
pub fn valuation_in_min(
    antecedent: &Formula,
    valuation: &Valuation,
    ranked_model: &RankedModel,
) -> bool {
    match ranked_model.rank(valuation) {
        Some(_) => ranked_model.is_in_min(antecedent, valuation.mask() as usize),
        None => false,
    }
}

/// Returns `true` iff the valuation violates the conditional in the ranked model.
///
/// A valuation violates a conditional when it is minimal among the valuations satisfying the antecedent
/// while falsifying the strict reading of the conditional.
pub fn violates_statement(
    statement: &Normally,
    valuation: &Valuation,
    ranked_model: &RankedModel,
) -> bool {
    valuation_in_min(statement.antecedent(), valuation, ranked_model)
        && !statement.materialize().evaluate(valuation)
}

struct MaterializedStatement {
    antecedent: Formula,
    materialized: Formula,
}

impl MaterializedStatement {
    fn is_violated_at(&self, ranked_model: &RankedModel, index: usize) -> bool {
        !self.materialized.evaluate(&ranked_model.valuations[index])
            && ranked_model.is_in_min(&self.antecedent, index)
    }
}

/// Computes the System Z ranking of the valuations of an alphabet given a knowledge base.
///
/// When no alphabet is given, the atoms occurring in the knowledge base are used.
///
/// All valuations start at rank 0. At each step, the valuations of the active rank violating a conditional
/// are moved to the next rank, which becomes the active one.
/// When the violating valuations are the same as in the previous step, they are given the infinite rank.
pub fn minimal_ranked_model(
    knowledge_base: &KnowledgeBase,
    alphabet: Option<&Alphabet>,
) -> RankedModel {
    let alphabet = alphabet.cloned().unwrap_or_else(|| knowledge_base.alphabet());
    let mut ranked_model = RankedModel::new_flat(alphabet);
    let statements = knowledge_base
        .iter()
        .map(|s| MaterializedStatement {
            antecedent: s.antecedent().clone(),
            materialized: s.materialize(),
        })
        .collect::<Vec<_>>();
    let mut level = 0;
    let mut violating = (0..ranked_model.len()).collect::<FxHashSet<usize>>();
    loop {
        let previous = violating;
        violating = (0..ranked_model.len())
            .filter(|i| ranked_model.rank_at(*i) == Rank::Finite(level))
            .filter(|i| statements.iter().any(|s| s.is_violated_at(&ranked_model, *i)))
            .collect();
        debug!("level {}: {} violating valuations", level, violating.len());
        if violating == previous {
            violating
                .iter()
                .for_each(|i| ranked_model.ranks[*i] = Rank::Infinite);
            break;
        }
        level += 1;
        violating
            .iter()
            .for_each(|i| ranked_model.ranks[*i] = Rank::Finite(level));
    }
    info!(
        "ranked model over {} valuations: max finite rank is {:?}, {} valuations of infinite rank",
        ranked_model.len(),
        ranked_model.max_finite_rank(),
        ranked_model.valuations_of_rank(Rank::Infinite).count()
    );
    ranked_model
}
