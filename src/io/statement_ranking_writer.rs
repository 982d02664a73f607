use crate::{Rank, StatementRanking};
use anyhow::{Context, Result};
use std::io::Write;

/// A structure used to write a statement ranking in a human readable form.
///
/// Each line gives a rank followed by its conditionals; finite ranks come first, in increasing order,
/// and the infinite rank comes last.
#[derive(Default)]
pub struct StatementRankingWriter;

impl StatementRankingWriter {
    /// Writes the statement ranking.
    pub fn write(&self, writer: &mut dyn Write, statement_ranking: &StatementRanking) -> Result<()> {
        let context = "while writing a statement ranking";
        let max_rank = statement_ranking.n_finite_ranks().saturating_sub(1);
        let pad = max_rank.to_string().len() + 1;
        statement_ranking
            .iter()
            .try_for_each(|(rank, statements)| {
                let label = match rank {
                    Rank::Finite(n) => format!("{}:", n),
                    Rank::Infinite => "∞:".to_string(),
                };
                writeln!(writer, "{:>pad$} {}", label, statements, pad = pad)
            })
            .context(context)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{implies, normally, statement_ranking, Atom, KnowledgeBase, Literal, Normally};
    use std::io::BufWriter;

    fn lit(s: &str) -> Literal {
        Literal::positive(Atom::new(s))
    }

    fn write_to_string(ranking: &StatementRanking) -> String {
        let mut writer = BufWriter::new(Vec::new());
        StatementRankingWriter.write(&mut writer, ranking).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_penguins() {
        let kb = KnowledgeBase::new([
            normally(lit("b"), lit("f")),
            normally(lit("p"), lit("b")),
            normally(lit("p"), lit("f").negate()),
            Normally::classical(implies(lit("p"), lit("b"))),
        ]);
        let expected = r#"0: { b |~ f }
1: { p |~ b, p |~ ¬f }
∞: { p → b }
"#;
        assert_eq!(expected, write_to_string(&statement_ranking(&kb)));
    }

    #[test]
    fn test_write_empty() {
        let ranking = statement_ranking(&KnowledgeBase::default());
        assert_eq!("∞: {  }\n", write_to_string(&ranking));
    }
}
