mod atom;
pub use atom::Atom;
pub use atom::Literal;

mod formula;
pub use formula::and_;
pub use formula::implies;
pub use formula::negate;
pub use formula::or_;
pub use formula::Connective;
pub use formula::Formula;
pub use formula::FormulaError;
pub use formula::Operand;

mod normally;
pub use normally::normally;
pub use normally::KnowledgeBase;
pub use normally::Normally;

mod semantics;
pub use semantics::entails;
pub use semantics::models;
pub use semantics::sat;
pub use semantics::unsat;
pub use semantics::valid;

mod valuation;
pub use valuation::Alphabet;
pub use valuation::Valuation;
pub use valuation::Valuations;
pub use valuation::MAX_ALPHABET_SIZE;
