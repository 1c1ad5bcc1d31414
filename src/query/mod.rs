//! query - tokenizing, validating, evaluating, and ranking boolean queries
//! over the inverted index.

pub mod eval;
pub mod tokens;

pub use eval::{rank, ScoreMap};
pub use tokens::{tokenize, validate};
