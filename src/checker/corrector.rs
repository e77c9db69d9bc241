//! The spell checker.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::checker::candidate::Candidate;
use crate::dictionary::{DictionaryStore, Vocabulary};
use crate::distance::{DistanceMatcher, EditCosts};
use crate::error::{EmendError, Result};

/// Delimiters recognized when tokenizing checker input.
///
/// This is deliberately simpler than the corpus delimiter class and performs
/// no lowercasing or filtering.
const TOKEN_DELIMITERS: &[char] = &[' ', ',', '.', '\t', ';'];

/// Corrects misspelled words against the dictionary.
///
/// Each token of the input is looked up verbatim in the vocabulary
/// (case-sensitive); on a miss, every vocabulary entry is scanned with the
/// distance engine and the closest entry within the threshold replaces the
/// token. Ties resolve to the lexicographically smallest word, so results
/// are reproducible despite the parallel scan. Tokens with no candidate
/// within the threshold pass through unchanged.
///
/// The corrected tokens are rejoined with single spaces; original delimiters
/// are not preserved.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use emend::checker::SpellChecker;
/// use emend::dictionary::{DictionaryStore, Vocabulary};
///
/// let vocabulary = Vocabulary::from_words(["spelling", "poetry", "word"]);
/// let store = Arc::new(DictionaryStore::with_vocabulary(vocabulary));
/// let checker = SpellChecker::new(store, None).unwrap();
///
/// assert_eq!(checker.check("speling").unwrap(), "spelling");
/// assert_eq!(checker.check("word").unwrap(), "word");
/// ```
pub struct SpellChecker {
    store: Arc<DictionaryStore>,
    costs: EditCosts,
    thread_pool: Arc<ThreadPool>,
}

impl SpellChecker {
    /// Create a spell checker over the given store.
    ///
    /// `costs` defaults to [`EditCosts::default`]. The scan thread pool is
    /// sized to the available cores.
    pub fn new(store: Arc<DictionaryStore>, costs: Option<EditCosts>) -> Result<Self> {
        Self::with_threads(store, costs, None)
    }

    /// Create a spell checker with an explicit scan thread count.
    pub fn with_threads(
        store: Arc<DictionaryStore>,
        costs: Option<EditCosts>,
        threads: Option<usize>,
    ) -> Result<Self> {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(threads.unwrap_or_else(num_cpus::get))
            .thread_name(|i| format!("emend-scan-{i}"))
            .build()
            .map_err(|e| EmendError::other(format!("Failed to create thread pool: {e}")))?;

        Ok(SpellChecker {
            store,
            costs: costs.unwrap_or_default(),
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Get the cost model bound to this checker.
    pub fn costs(&self) -> &EditCosts {
        &self.costs
    }

    /// Correct an input string.
    ///
    /// The first call triggers dictionary construction if the store has not
    /// been built yet; that build error is the only failure mode.
    pub fn check(&self, input: &str) -> Result<String> {
        let vocabulary = self.store.vocabulary()?;

        let corrected: Vec<String> = input
            .split(TOKEN_DELIMITERS)
            .filter(|token| !token.is_empty())
            .map(|token| self.correct_token(token, &vocabulary))
            .collect();

        Ok(corrected.join(" "))
    }

    /// All vocabulary entries within the threshold for a single token,
    /// sorted by distance then word.
    ///
    /// An exact dictionary hit yields a single zero-distance candidate.
    pub fn suggest(&self, token: &str) -> Result<Vec<Candidate>> {
        let vocabulary = self.store.vocabulary()?;

        if vocabulary.contains(token) {
            return Ok(vec![Candidate::new(token, 0)]);
        }

        let mut candidates: Vec<Candidate> = self
            .thread_pool
            .install(|| self.scan(token, &vocabulary).collect());
        candidates.sort();
        Ok(candidates)
    }

    /// Statistics about this checker and its dictionary.
    ///
    /// Triggers dictionary construction like [`check`](SpellChecker::check).
    pub fn stats(&self) -> Result<CheckerStats> {
        let vocabulary = self.store.vocabulary()?;
        Ok(CheckerStats {
            vocabulary_words: vocabulary.len(),
            costs: self.costs,
        })
    }

    fn correct_token(&self, token: &str, vocabulary: &Vocabulary) -> String {
        if vocabulary.contains(token) {
            return token.to_string();
        }

        let best = self.thread_pool.install(|| self.scan(token, vocabulary).min());

        match best {
            Some(candidate) => candidate.into_word(),
            None => token.to_string(),
        }
    }

    /// Parallel scan of the whole vocabulary, yielding candidates within the
    /// threshold.
    fn scan<'a>(
        &self,
        token: &str,
        vocabulary: &'a Vocabulary,
    ) -> impl ParallelIterator<Item = Candidate> + 'a {
        let matcher = DistanceMatcher::new(token, self.costs);
        vocabulary.words().par_iter().filter_map(move |entry| {
            matcher
                .within(entry)
                .map(|distance| Candidate::new(entry.clone(), distance))
        })
    }
}

impl std::fmt::Debug for SpellChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellChecker")
            .field("costs", &self.costs)
            .field("store", &self.store)
            .finish()
    }
}

/// Statistics about a spell checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerStats {
    /// Number of words in the vocabulary.
    pub vocabulary_words: usize,
    /// The cost model in effect.
    pub costs: EditCosts,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_with(words: &[&str], costs: Option<EditCosts>) -> SpellChecker {
        let store = Arc::new(DictionaryStore::with_vocabulary(Vocabulary::from_words(
            words.iter().copied(),
        )));
        SpellChecker::new(store, costs).unwrap()
    }

    #[test]
    fn test_exact_match_short_circuits() {
        let checker = checker_with(&["word", "Word"], None);
        assert_eq!(checker.check("word").unwrap(), "word");
        assert_eq!(checker.check("Word").unwrap(), "Word");
    }

    #[test]
    fn test_miss_is_corrected() {
        let checker = checker_with(&["spelling", "poetry"], None);
        assert_eq!(checker.check("speling").unwrap(), "spelling");
        assert_eq!(checker.check("peotryy").unwrap(), "poetry");
    }

    #[test]
    fn test_over_threshold_passes_through() {
        let checker = checker_with(&["quintessential"], None);
        assert_eq!(checker.check("zzz").unwrap(), "zzz");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // peotryy -> poetry is exactly distance 2, at the default threshold.
        let checker = checker_with(&["poetry"], None);
        assert_eq!(checker.check("peotryy").unwrap(), "poetry");

        let strict = checker_with(&["poetry"], Some(EditCosts::default().with_threshold(1)));
        assert_eq!(strict.check("peotryy").unwrap(), "peotryy");
    }

    #[test]
    fn test_delimiters_are_not_preserved() {
        let checker = checker_with(&["hello", "world"], None);
        assert_eq!(checker.check("hello,world").unwrap(), "hello world");
        assert_eq!(checker.check("hello.\tworld;;").unwrap(), "hello world");
        assert_eq!(checker.check("  hello   world  ").unwrap(), "hello world");
    }

    #[test]
    fn test_empty_input() {
        let checker = checker_with(&["word"], None);
        assert_eq!(checker.check("").unwrap(), "");
        assert_eq!(checker.check(" ,.;\t").unwrap(), "");
    }

    #[test]
    fn test_deterministic_tie_break() {
        // Both entries are distance 1 from "cot"; the lexicographically
        // smaller one must win every time.
        let checker = checker_with(&["cat", "cut"], None);
        for _ in 0..16 {
            assert_eq!(checker.check("cot").unwrap(), "cat");
        }
    }

    #[test]
    fn test_suggest_sorted_candidates() {
        let checker = checker_with(&["cat", "cut", "coat", "zebra"], None);
        let candidates = checker.suggest("cot").unwrap();
        let words: Vec<_> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "coat", "cut"]);
        assert_eq!(candidates[0].distance, 1);
        assert_eq!(candidates[2].distance, 1);
    }

    #[test]
    fn test_suggest_exact_hit() {
        let checker = checker_with(&["word"], None);
        let candidates = checker.suggest("word").unwrap();
        assert_eq!(candidates, vec![Candidate::new("word", 0)]);
    }

    #[test]
    fn test_stats() {
        let checker = checker_with(&["word", "poetry"], None);
        let stats = checker.stats().unwrap();
        assert_eq!(stats.vocabulary_words, 2);
        assert_eq!(stats.costs, EditCosts::default());
    }
}
