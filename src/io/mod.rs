mod ranked_model_writer;
pub use ranked_model_writer::RankedModelWriter;

mod statement_ranking_writer;
pub use statement_ranking_writer::StatementRankingWriter;
