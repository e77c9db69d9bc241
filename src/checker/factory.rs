//! Factory binding cost models to a shared dictionary store.

use std::sync::Arc;

use crate::checker::corrector::SpellChecker;
use crate::corpus::CorpusSource;
use crate::dictionary::DictionaryStore;
use crate::distance::EditCosts;
use crate::error::Result;

/// Creates spell checkers that share one lazily-built dictionary.
///
/// The factory owns the [`DictionaryStore`]; every checker it creates reuses
/// the memoized vocabulary, so corpus normalization runs at most once no
/// matter how many checkers exist or which of them touches the dictionary
/// first.
///
/// # Examples
///
/// ```
/// use emend::checker::CheckerFactory;
/// use emend::corpus::StaticSource;
/// use emend::distance::EditCosts;
///
/// let factory = CheckerFactory::from_source(Box::new(StaticSource::new("poetry word ")));
///
/// let default = factory.create_spell_checker(None).unwrap();
/// let strict = factory
///     .create_spell_checker(Some(EditCosts::default().with_threshold(1)))
///     .unwrap();
///
/// assert_eq!(default.check("peotryy").unwrap(), "poetry");
/// assert_eq!(strict.check("peotryy").unwrap(), "peotryy");
/// ```
#[derive(Debug)]
pub struct CheckerFactory {
    store: Arc<DictionaryStore>,
}

impl CheckerFactory {
    /// Create a factory over an existing store.
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        CheckerFactory { store }
    }

    /// Create a factory whose dictionary will be built from the given
    /// corpus source on first use.
    pub fn from_source(source: Box<dyn CorpusSource>) -> Self {
        CheckerFactory {
            store: Arc::new(DictionaryStore::new(source)),
        }
    }

    /// Create a spell checker bound to the given cost model, or the default
    /// model when `None`.
    ///
    /// Dictionary construction is not triggered here; it happens on the
    /// checker's first real use.
    pub fn create_spell_checker(&self, costs: Option<EditCosts>) -> Result<SpellChecker> {
        SpellChecker::new(Arc::clone(&self.store), costs)
    }

    /// The shared dictionary store.
    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }
}
