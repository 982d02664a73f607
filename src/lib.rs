//! A library used to reason on knowledge bases made of strict and defeasible conditionals, following System Z.

mod core;
pub use crate::core::and_;
pub use crate::core::entails;
pub use crate::core::implies;
pub use crate::core::models;
pub use crate::core::negate;
pub use crate::core::normally;
pub use crate::core::or_;
pub use crate::core::sat;
pub use crate::core::unsat;
pub use crate::core::valid;
pub use crate::core::Alphabet;
pub use crate::core::Atom;
pub use crate::core::Connective;
pub use crate::core::Formula;
pub use crate::core::FormulaError;
pub use crate::core::KnowledgeBase;
pub use crate::core::Literal;
pub use crate::core::Normally;
pub use crate::core::Operand;
pub use crate::core::Valuation;
pub use crate::core::Valuations;
pub use crate::core::MAX_ALPHABET_SIZE;

mod io;
pub use io::RankedModelWriter;
pub use io::StatementRankingWriter;

mod reasoning;
pub use reasoning::justifications;
pub use reasoning::minimal_ranked_model;
pub use reasoning::statement_ranking;
pub use reasoning::valuation_in_min;
pub use reasoning::violates_statement;
pub use reasoning::Rank;
pub use reasoning::RankedModel;
pub use reasoning::StatementRanking;
