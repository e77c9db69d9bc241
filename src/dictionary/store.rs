//! Memoized, lazily-built dictionary store.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::corpus::{CorpusNormalizer, CorpusSource};
use crate::dictionary::Vocabulary;
use crate::error::{EmendError, Result};

/// Owns the corpus source and the vocabulary built from it.
///
/// The normalization pipeline runs at most once per store: the first call to
/// [`vocabulary`](DictionaryStore::vocabulary) consumes the source and every
/// later call returns the same shared set. Concurrent first access is
/// serialized, so the pipeline never runs twice.
///
/// A failed build is fatal for the store: the source has been consumed, and
/// subsequent accesses report the store as spent instead of silently serving
/// an empty dictionary.
pub struct DictionaryStore {
    source: Mutex<Option<Box<dyn CorpusSource>>>,
    vocabulary: OnceLock<Arc<Vocabulary>>,
}

impl DictionaryStore {
    /// Create a store that will build its vocabulary from the given source.
    pub fn new(source: Box<dyn CorpusSource>) -> Self {
        DictionaryStore {
            source: Mutex::new(Some(source)),
            vocabulary: OnceLock::new(),
        }
    }

    /// Create a store around an already-built vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        let store = DictionaryStore {
            source: Mutex::new(None),
            vocabulary: OnceLock::new(),
        };
        let _ = store.vocabulary.set(Arc::new(vocabulary));
        store
    }

    /// Get the vocabulary, building it on first access.
    pub fn vocabulary(&self) -> Result<Arc<Vocabulary>> {
        if let Some(vocabulary) = self.vocabulary.get() {
            return Ok(Arc::clone(vocabulary));
        }

        // Slow path: serialize builders, then re-check. Whoever holds the
        // lock first runs the pipeline; everyone else blocks here and finds
        // the memoized value on the second check.
        let mut guard = self.source.lock();
        if let Some(vocabulary) = self.vocabulary.get() {
            return Ok(Arc::clone(vocabulary));
        }

        let mut source = guard.take().ok_or_else(|| {
            EmendError::invalid_operation("corpus source already consumed by a failed build")
        })?;

        let vocabulary = Arc::new(CorpusNormalizer::new().normalize(source.as_mut())?);
        let _ = self.vocabulary.set(Arc::clone(&vocabulary));
        Ok(vocabulary)
    }

    /// Whether the vocabulary has been built yet.
    pub fn is_built(&self) -> bool {
        self.vocabulary.get().is_some()
    }
}

impl std::fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryStore")
            .field("built", &self.is_built())
            .field(
                "words",
                &self.vocabulary.get().map(|v| v.len()).unwrap_or(0),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::corpus::StaticSource;

    /// Counts how many times it has been drained; one drain per build.
    struct CountingSource {
        inner: StaticSource,
        drains: Arc<AtomicUsize>,
        returned_any: bool,
    }

    impl CountingSource {
        fn new(text: &str, drains: Arc<AtomicUsize>) -> Self {
            CountingSource {
                inner: StaticSource::new(text),
                drains,
                returned_any: false,
            }
        }
    }

    impl CorpusSource for CountingSource {
        fn next_chunk(&mut self) -> Result<Option<String>> {
            if !self.returned_any {
                self.returned_any = true;
                self.drains.fetch_add(1, Ordering::SeqCst);
            }
            self.inner.next_chunk()
        }
    }

    #[test]
    fn test_lazy_build_and_memoization() {
        let store = DictionaryStore::new(Box::new(StaticSource::new("poetry word bicycle ")));
        assert!(!store.is_built());

        let first = store.vocabulary().unwrap();
        assert!(store.is_built());
        assert!(first.contains("poetry"));

        let second = store.vocabulary().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let drains = Arc::new(AtomicUsize::new(0));
        let source = CountingSource::new("spelling corrected arranged ", Arc::clone(&drains));
        let store = Arc::new(DictionaryStore::new(Box::new(source)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.vocabulary().unwrap())
            })
            .collect();

        let vocabularies: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(drains.load(Ordering::SeqCst), 1);
        for vocabulary in &vocabularies {
            assert!(Arc::ptr_eq(vocabulary, &vocabularies[0]));
        }
    }

    #[test]
    fn test_failed_build_is_fatal() {
        struct FailingSource;

        impl CorpusSource for FailingSource {
            fn next_chunk(&mut self) -> Result<Option<String>> {
                Err(EmendError::corpus("decode failure"))
            }
        }

        let store = DictionaryStore::new(Box::new(FailingSource));
        assert!(matches!(store.vocabulary(), Err(EmendError::Corpus(_))));
        // The source is spent; no silent fallback to an empty dictionary.
        assert!(matches!(
            store.vocabulary(),
            Err(EmendError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_with_vocabulary() {
        let store = DictionaryStore::with_vocabulary(Vocabulary::from_words(["word"]));
        assert!(store.is_built());
        assert!(store.vocabulary().unwrap().contains("word"));
    }
}
