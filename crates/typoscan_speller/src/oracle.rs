//! The spelling oracle seam.
//!
//! The aggregator depends on this trait rather than any concrete
//! dictionary, so tests substitute a deterministic fake. Implementations
//! must be total: any input string gets an answer, and failure modes are
//! expressed as "no suggestions" rather than an error.

use std::cell::RefCell;
use typoscan_core::collections::FxMap;

/// Produces ordered correction candidates for a word.
///
/// An empty vector means the word is considered correctly spelled.
/// Implementations must not panic for any input.
pub trait SpellingOracle {
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Memoizing wrapper around another oracle.
///
/// The same identifier often occurs many times in one file; the wrapper
/// makes the once-per-word cost explicit instead of relying on callers to
/// deduplicate. Suggestion reuse across occurrences is sound because the
/// memo pins the first answer for the lifetime of the run.
pub struct CachedOracle<O> {
    inner: O,
    memo: RefCell<FxMap<String, Vec<String>>>,
}

impl<O: SpellingOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            memo: RefCell::new(FxMap::default()),
        }
    }
}

impl<O: SpellingOracle> SpellingOracle for CachedOracle<O> {
    fn suggest(&self, word: &str) -> Vec<String> {
        if let Some(hit) = self.memo.borrow().get(word) {
            return hit.clone();
        }
        let suggestions = self.inner.suggest(word);
        self.memo
            .borrow_mut()
            .insert(word.to_string(), suggestions.clone());
        suggestions
    }
}
