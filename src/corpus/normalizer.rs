//! Corpus normalization pipeline.

use std::sync::LazyLock;

use ahash::AHashSet;
use rayon::prelude::*;
use regex::Regex;

use crate::corpus::source::CorpusSource;
use crate::dictionary::Vocabulary;
use crate::error::Result;

/// Delimiter class separating raw tokens: digits, whitespace, and standard
/// ASCII punctuation.
static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[[:digit:][:space:][:punct:]]+").expect("delimiter pattern is valid")
});

/// Builds a [`Vocabulary`] from a stream of corpus chunks.
///
/// Chunks are re-segmented so that no token is ever split across a chunk
/// boundary: the tail of each chunk after its last whitespace character is
/// carried over into the next one. Complete segments are split on the
/// digit/whitespace/punctuation class; empty and single-character tokens are
/// discarded and survivors are lowercased.
///
/// After the whole corpus is consumed, two artifacts of this tokenization are
/// patched up exactly once: the possessive-split token `"s"` and the
/// lowercased pronoun `"i"` are removed, and `"I"` is inserted in its
/// original casing.
///
/// # Examples
///
/// ```
/// use emend::corpus::{CorpusNormalizer, StaticSource};
///
/// let mut source = StaticSource::new("It's a small world, isn't it? ");
/// let vocabulary = CorpusNormalizer::new().normalize(&mut source).unwrap();
///
/// assert!(vocabulary.contains("small"));
/// assert!(vocabulary.contains("world"));
/// assert!(!vocabulary.contains("s"));
/// assert!(vocabulary.contains("I"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorpusNormalizer;

impl CorpusNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        CorpusNormalizer
    }

    /// Consume the source and build the vocabulary.
    ///
    /// Any source error aborts construction; there is no partial-dictionary
    /// fallback.
    pub fn normalize(&self, source: &mut dyn CorpusSource) -> Result<Vocabulary> {
        let mut words = AHashSet::new();
        let mut leftover = String::new();

        while let Some(chunk) = source.next_chunk()? {
            let mut combined = std::mem::take(&mut leftover);
            combined.push_str(&chunk);

            match combined.rfind(|c: char| c.is_ascii_whitespace()) {
                Some(index) => {
                    self.absorb_segment(&combined[..index], &mut words);
                    leftover = combined[index + 1..].to_string();
                }
                // No whitespace yet: the whole chunk may still be the prefix
                // of an unfinished token.
                None => leftover = combined,
            }
        }

        self.absorb_segment(&leftover, &mut words);

        // Patch up tokenization artifacts: 's possessives and the pronoun I.
        words.remove("s");
        words.remove("i");
        words.insert("I".to_string());

        Ok(Vocabulary::from_set(words))
    }

    /// Split a complete segment into raw tokens and fan the
    /// filter/lowercase work out across worker threads.
    ///
    /// Each worker folds into a thread-local set; the locals are merged at
    /// the end, so the shared set sees no concurrent writes.
    fn absorb_segment(&self, segment: &str, words: &mut AHashSet<String>) {
        if segment.is_empty() {
            return;
        }

        let raw: Vec<&str> = DELIMITERS.split(segment).collect();

        let local = raw
            .par_iter()
            .filter(|token| !token.is_empty())
            .filter(|token| token.chars().count() > 1)
            .map(|token| token.to_lowercase())
            .fold(AHashSet::new, |mut set, word| {
                set.insert(word);
                set
            })
            .reduce(AHashSet::new, |mut merged, set| {
                merged.extend(set);
                merged
            });

        words.extend(local);
    }
}
