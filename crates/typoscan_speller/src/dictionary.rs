//! The embedded dictionary used by the built-in oracle.
//!
//! Dictionary contents are deliberately modest: common English vocabulary
//! plus the programming terms that show up in identifiers. Lookup is
//! case-insensitive, and identifiers are additionally accepted when every
//! camelCase/snake_case part is known, so `analyzeFile` is not a typo even
//! though it is not a dictionary word.

use typoscan_core::collections::FxHashSet;

const WORDS: &str = include_str!("words.txt");

/// A fixed set of known words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<&'static str>,
}

impl Dictionary {
    /// The embedded word list.
    pub fn builtin() -> Self {
        Self {
            words: WORDS
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect(),
        }
    }

    /// Build a dictionary from an explicit word list (lowercase entries).
    pub fn from_words(words: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Whether the word itself is in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        if word.chars().any(char::is_uppercase) {
            return self.words.contains(word.to_lowercase().as_str());
        }
        false
    }

    /// Whether an identifier is considered correctly spelled.
    ///
    /// Very short tokens are accepted (loop variables, abbreviations), as
    /// are identifiers whose camelCase/snake_case parts are all known.
    pub fn is_known(&self, word: &str) -> bool {
        if word.chars().count() < 3 {
            return true;
        }
        if self.contains(word) {
            return true;
        }
        let parts = split_word_parts(word);
        parts.len() > 1
            && parts
                .iter()
                .all(|part| part.chars().count() < 3 || self.contains(part))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split an identifier into alphabetic word parts at underscores, digits,
/// and camelCase boundaries. An uppercase run ends one character before a
/// following lowercase letter, so `XMLHttpRequest` splits as
/// `XML`/`Http`/`Request`.
pub(crate) fn split_word_parts(word: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut parts = Vec::new();
    let mut start: Option<usize> = None;

    for i in 0..chars.len() {
        let (offset, ch) = chars[i];
        if !ch.is_alphabetic() {
            if let Some(s) = start.take() {
                parts.push(&word[s..offset]);
            }
            continue;
        }
        match start {
            None => start = Some(offset),
            Some(s) => {
                let prev = chars[i - 1].1;
                let next_is_lower = chars.get(i + 1).is_some_and(|&(_, n)| n.is_lowercase());
                let boundary = (prev.is_lowercase() && ch.is_uppercase())
                    || (prev.is_uppercase() && ch.is_uppercase() && next_is_lower);
                if boundary {
                    parts.push(&word[s..offset]);
                    start = Some(offset);
                }
            }
        }
    }
    if let Some(s) = start {
        parts.push(&word[s..]);
    }
    parts
}
