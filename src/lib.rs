//! # Emend
//!
//! A spell checking library for Rust based on a generalized
//! Damerau-Levenshtein distance.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Unrestricted-transposition Damerau-Levenshtein distance with
//!   configurable per-operation costs
//! - Vocabulary construction from raw text corpora
//! - Lazily built, memoized dictionary shared across checkers
//! - Parallel dictionary scanning
//!
//! ## Example
//!
//! ```
//! use emend::checker::CheckerFactory;
//! use emend::corpus::StaticSource;
//!
//! let corpus = StaticSource::new("the quick brown fox jumps over the lazy dog ");
//! let factory = CheckerFactory::from_source(Box::new(corpus));
//! let checker = factory.create_spell_checker(None).unwrap();
//!
//! assert_eq!(checker.check("the quikc brown fox").unwrap(), "the quick brown fox");
//! ```

pub mod checker;
pub mod cli;
pub mod corpus;
pub mod dictionary;
pub mod distance;
pub mod error;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::checker::{Candidate, CheckerFactory, SpellChecker};
    pub use crate::corpus::{CorpusNormalizer, CorpusSource, StaticSource, TextSource};
    pub use crate::dictionary::{DictionaryStore, Vocabulary};
    pub use crate::distance::{EditCosts, damerau_levenshtein};
    pub use crate::error::{EmendError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
