//! Spell checking orchestration.
//!
//! The [`SpellChecker`] ties the pieces together: it tokenizes an input
//! string, short-circuits on exact dictionary membership, scans the
//! vocabulary with the distance engine for everything else, and reassembles
//! the corrected string.

pub mod candidate;
pub mod corrector;
pub mod factory;

pub use candidate::Candidate;
pub use corrector::{CheckerStats, SpellChecker};
pub use factory::CheckerFactory;
