//! typoscan_speller: Whitelist filtering and spelling suggestions for
//! identifier text.
//!
//! The aggregator consults two capabilities per occurrence: the whitelist
//! (a fixed set of well-known API and runtime names, checked first) and a
//! [`SpellingOracle`] that returns ordered corrections for a word, where an
//! empty list means the word is considered correctly spelled.

mod dictionary;
mod oracle;
mod suggest;
mod whitelist;

pub use dictionary::Dictionary;
pub use oracle::{CachedOracle, SpellingOracle};
pub use suggest::DictionaryOracle;
pub use whitelist::Whitelist;
