//! Corpus consumption and normalization.
//!
//! A corpus is the raw source text the vocabulary is derived from. It is
//! delivered as a sequence of text chunks by a [`CorpusSource`]; the
//! [`CorpusNormalizer`] turns that stream into the deduplicated, lowercased
//! vocabulary used as the correction universe. Archive extraction and
//! decompression are the caller's concern.

pub mod normalizer;
pub mod source;

pub use normalizer::CorpusNormalizer;
pub use source::{CorpusSource, StaticSource, TextSource};
