use crate::{entails, Formula, KnowledgeBase, Normally};
use itertools::Itertools;
use log::{debug, info};
use std::collections::BTreeSet;

/// Computes the justifications of the negation of a formula.
///
/// A justification is a subset `J` of the defeasible conditionals such that the strict readings of `J`
/// and of the classical conditionals entail `¬φ`. Only the justifications of minimal size are returned;
/// an empty set of justifications means that no subset of the defeasible conditionals entails `¬φ`.
///
/// The subsets are enumerated by increasing size, so the search stops after the first size that provides a justification.
/// The number of candidates is exponential in the number of defeasible conditionals.
pub fn justifications(
    classical_statements: &KnowledgeBase,
    defeasible_statements: &KnowledgeBase,
    formula: &Formula,
) -> BTreeSet<KnowledgeBase> {
    let negated_formula = formula.negate();
    let strict = classical_statements.materialized();
    let defeasible = defeasible_statements
        .iter()
        .map(|s| (s, s.materialize()))
        .collect::<Vec<(&Normally, Formula)>>();
    let mut best_size: Option<usize> = None;
    let mut found: BTreeSet<KnowledgeBase> = BTreeSet::new();
    for size in 0..=defeasible.len() {
        if best_size.is_some_and(|b| size > b) {
            break;
        }
        for candidate in defeasible.iter().combinations(size) {
            let materialized = strict.iter().chain(candidate.iter().map(|(_, f)| f));
            if !entails(materialized, &negated_formula) {
                continue;
            }
            if best_size != Some(size) {
                debug!("found a justification of size {}", size);
                found.clear();
                best_size = Some(size);
            }
            found.insert(candidate.iter().map(|(s, _)| (*s).clone()).collect());
        }
    }
    info!(
        "{} justifications found for {} among {} defeasible conditionals",
        found.len(),
        formula,
        defeasible.len()
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{and_, implies, normally, Atom, Literal};

    fn lit(s: &str) -> Literal {
        Literal::positive(Atom::new(s))
    }

    fn assert_minimal(
        classical: &KnowledgeBase,
        justifications: &BTreeSet<KnowledgeBase>,
        formula: &Formula,
    ) {
        for j in justifications {
            let full = j.union(classical).materialized();
            assert!(entails(&full, &formula.negate()));
            for removed in j.iter() {
                let smaller = j
                    .iter()
                    .filter(|s| *s != removed)
                    .cloned()
                    .collect::<KnowledgeBase>();
                let smaller_materialized = smaller.union(classical).materialized();
                assert!(!entails(&smaller_materialized, &formula.negate()));
            }
        }
    }

    #[test]
    fn test_classical_rule_alone() {
        let kb = KnowledgeBase::new([
            Normally::classical(implies(lit("p"), lit("q"))),
            normally(lit("r"), lit("s")),
        ]);
        let (classical, defeasible) = kb.separate();
        let formula = and_(lit("p"), lit("q").negate());
        let js = justifications(&classical, &defeasible, &formula);
        assert_eq!(
            [KnowledgeBase::default()].into_iter().collect::<BTreeSet<_>>(),
            js
        );
    }

    #[test]
    fn test_single_justification() {
        let defeasible = KnowledgeBase::new([
            normally(lit("b"), lit("f")),
            normally(lit("p"), lit("b")),
            normally(lit("p"), lit("f").negate()),
        ]);
        let formula = and_(lit("p"), lit("f"));
        let js = justifications(&KnowledgeBase::default(), &defeasible, &formula);
        let expected = KnowledgeBase::new([normally(lit("p"), lit("f").negate())]);
        assert_eq!([expected].into_iter().collect::<BTreeSet<_>>(), js);
        assert_minimal(&KnowledgeBase::default(), &js, &formula);
    }

    #[test]
    fn test_several_justifications() {
        let defeasible = KnowledgeBase::new([
            normally(lit("a"), lit("b")),
            normally(lit("a"), lit("b").negate()),
            normally(lit("a"), lit("c")),
            normally(lit("c"), lit("a").negate()),
            normally(lit("d"), lit("e")),
        ]);
        let formula = Formula::leaf(lit("a"));
        let js = justifications(&KnowledgeBase::default(), &defeasible, &formula);
        let expected = [
            KnowledgeBase::new([
                normally(lit("a"), lit("b")),
                normally(lit("a"), lit("b").negate()),
            ]),
            KnowledgeBase::new([
                normally(lit("a"), lit("c")),
                normally(lit("c"), lit("a").negate()),
            ]),
        ]
        .into_iter()
        .collect::<BTreeSet<_>>();
        assert_eq!(expected, js);
        assert_minimal(&KnowledgeBase::default(), &js, &formula);
    }

    #[test]
    fn test_larger_justifications_are_discarded() {
        let defeasible = KnowledgeBase::new([
            normally(lit("a"), lit("b")),
            normally(lit("b"), lit("a").negate()),
            normally(lit("a"), lit("a").negate()),
        ]);
        let formula = Formula::leaf(lit("a"));
        let js = justifications(&KnowledgeBase::default(), &defeasible, &formula);
        let expected = KnowledgeBase::new([normally(lit("a"), lit("a").negate())]);
        assert_eq!([expected].into_iter().collect::<BTreeSet<_>>(), js);
        assert_minimal(&KnowledgeBase::default(), &js, &formula);
    }

    #[test]
    fn test_whole_chain_needed() {
        let defeasible = KnowledgeBase::new([
            normally(lit("b"), lit("f")),
            normally(lit("p"), lit("b")),
            normally(lit("p"), lit("f").negate()),
        ]);
        let formula = Formula::leaf(lit("p"));
        let js = justifications(&KnowledgeBase::default(), &defeasible, &formula);
        assert_eq!([defeasible].into_iter().collect::<BTreeSet<_>>(), js);
    }

    #[test]
    fn test_no_justification() {
        let defeasible = KnowledgeBase::new([normally(lit("a"), lit("b"))]);
        let formula = and_(lit("a"), lit("c"));
        let js = justifications(&KnowledgeBase::default(), &defeasible, &formula);
        assert!(js.is_empty());
    }

    #[test]
    fn test_contradictory_formula() {
        let defeasible = KnowledgeBase::new([normally(lit("a"), lit("b"))]);
        let js = justifications(&KnowledgeBase::default(), &defeasible, &Formula::bot());
        assert_eq!(
            [KnowledgeBase::default()].into_iter().collect::<BTreeSet<_>>(),
            js
        );
    }

    #[test]
    fn test_classical_rules_combine_with_defeasible_ones() {
        let kb = KnowledgeBase::new([
            Normally::classical(implies(lit("p"), lit("b"))),
            normally(lit("b"), lit("f")),
            normally(lit("p"), lit("w")),
        ]);
        let (classical, defeasible) = kb.separate();
        let formula = and_(lit("p"), lit("f").negate());
        let js = justifications(&classical, &defeasible, &formula);
        let expected = KnowledgeBase::new([normally(lit("b"), lit("f"))]);
        assert_eq!([expected].into_iter().collect::<BTreeSet<_>>(), js);
        assert_minimal(&classical, &js, &formula);
    }
}
