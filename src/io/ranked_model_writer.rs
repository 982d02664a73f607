use crate::{Alphabet, Rank, RankedModel, Valuation};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::io::Write;

/// A structure used to write a ranked model in a human readable form.
///
/// Ranks are written from the most exceptional one (the infinite rank, if used) down to rank 0.
/// Each rank is introduced by a header line, followed by its valuations, one per line.
/// A valuation is written as the set of its true atoms followed by the set of its false atoms.
#[derive(Default)]
pub struct RankedModelWriter;

impl RankedModelWriter {
    /// Writes the ranked model.
    pub fn write(&self, writer: &mut dyn Write, ranked_model: &RankedModel) -> Result<()> {
        let context = "while writing a ranked model";
        let max_rank = ranked_model.max_finite_rank();
        let pad = max_rank.unwrap_or(0).to_string().len() + 1;
        let ranks = std::iter::once(Rank::Infinite)
            .filter(|_| ranked_model.has_infinite_rank())
            .chain(max_rank.into_iter().flat_map(|m| (0..=m).rev().map(Rank::Finite)));
        for rank in ranks {
            let label = format!("{}:", rank);
            writeln!(writer, "{:>pad$} --------", label, pad = pad).context(context)?;
            ranked_model
                .valuations_of_rank(rank)
                .try_for_each(|v| {
                    write!(writer, "{}", " ".repeat(pad + 2))?;
                    write_valuation(writer, v, ranked_model.alphabet())
                })
                .context(context)?;
        }
        Ok(())
    }
}

fn write_valuation(
    writer: &mut dyn Write,
    valuation: &Valuation,
    alphabet: &Alphabet,
) -> std::io::Result<()> {
    let width = alphabet
        .iter()
        .map(|a| a.symbol().chars().count() + 1)
        .sum::<usize>()
        .saturating_sub(1);
    writeln!(
        writer,
        "{{ {:<width$} }} {{ {:<width$} }}",
        valuation.true_atoms().join(" "),
        valuation.false_atoms().join(" "),
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{minimal_ranked_model, normally, Atom, KnowledgeBase, Literal, Normally};
    use std::io::BufWriter;

    fn lit(s: &str) -> Literal {
        Literal::positive(Atom::new(s))
    }

    fn write_to_string(ranked_model: &RankedModel) -> String {
        let mut writer = BufWriter::new(Vec::new());
        RankedModelWriter.write(&mut writer, ranked_model).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_single_rule() {
        let kb = KnowledgeBase::new([normally(lit("a"), lit("b"))]);
        let model = minimal_ranked_model(&kb, None);
        let expected = r#"1: --------
    { a   } { b   }
0: --------
    {     } { a b }
    { b   } { a   }
    { a b } {     }
"#;
        assert_eq!(expected, write_to_string(&model));
    }

    #[test]
    fn test_write_infinite_rank() {
        let kb = KnowledgeBase::new([
            normally(lit("a"), lit("b")),
            normally(lit("a"), lit("b").negate()),
        ]);
        let model = minimal_ranked_model(&kb, None);
        let expected = r#"∞: --------
    { a   } { b   }
    { a b } {     }
0: --------
    {     } { a b }
    { b   } { a   }
"#;
        assert_eq!(expected, write_to_string(&model));
    }

    #[test]
    fn test_write_only_infinite_ranks() {
        let kb = KnowledgeBase::new([Normally::classical(Literal::Bot)]);
        let model = minimal_ranked_model(&kb, Some(&Alphabet::new([Atom::new("a")])));
        let expected = r#"∞: --------
    {   } { a }
    { a } {   }
"#;
        assert_eq!(expected, write_to_string(&model));
    }

    #[test]
    fn test_write_empty_alphabet() {
        let model = minimal_ranked_model(&KnowledgeBase::default(), None);
        assert_eq!("0: --------\n    {  } {  }\n", write_to_string(&model));
    }
}
