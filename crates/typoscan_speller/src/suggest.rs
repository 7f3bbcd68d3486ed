//! The built-in dictionary oracle.
//!
//! Candidates are produced by single edit operations - adjacent
//! transposition, deletion, replacement, insertion - and validated against
//! the dictionary. Generators run in that order, so a transposition fix
//! like `wrod` -> `word` outranks more speculative edits. The oracle is
//! pure: the same word always yields the same suggestion list.

use crate::dictionary::Dictionary;
use crate::oracle::SpellingOracle;
use typoscan_core::collections::FxHashSet;

/// Longest word worth generating candidates for. Identifiers beyond this
/// are compounds the single-edit generators cannot fix anyway.
const MAX_CANDIDATE_LEN: usize = 24;

/// A [`SpellingOracle`] backed by the embedded dictionary.
pub struct DictionaryOracle {
    dictionary: Dictionary,
    max_suggestions: usize,
}

impl DictionaryOracle {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            max_suggestions: 5,
        }
    }

    /// Oracle over the embedded word list.
    pub fn builtin() -> Self {
        Self::new(Dictionary::builtin())
    }

    /// Cap the number of suggestions returned per word.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }
}

impl SpellingOracle for DictionaryOracle {
    fn suggest(&self, word: &str) -> Vec<String> {
        if word.is_empty() || self.dictionary.is_known(word) {
            return Vec::new();
        }
        let lower: Vec<char> = word.to_lowercase().chars().collect();
        if lower.len() < 2
            || lower.len() > MAX_CANDIDATE_LEN
            || !lower.iter().all(|c| c.is_ascii_alphabetic())
        {
            return Vec::new();
        }

        let mut status = SuggestionStatus::new(&self.dictionary, self.max_suggestions);
        generate_transpositions(&lower, &mut status);
        generate_deletions(&lower, &mut status);
        generate_replacements(&lower, &mut status);
        generate_insertions(&lower, &mut status);

        status
            .found
            .into_iter()
            .map(|candidate| restore_case(word, &candidate))
            .collect()
    }
}

/// Tracks validated candidates, deduplication, and the abort condition
/// shared by all generators.
struct SuggestionStatus<'d> {
    dictionary: &'d Dictionary,
    tried: FxHashSet<String>,
    found: Vec<String>,
    limit: usize,
}

impl<'d> SuggestionStatus<'d> {
    fn new(dictionary: &'d Dictionary, limit: usize) -> Self {
        Self {
            dictionary,
            tried: FxHashSet::default(),
            found: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.found.len() >= self.limit
    }

    /// Validate one candidate and keep it if the dictionary accepts it.
    fn offer(&mut self, candidate: String) {
        if self.is_full() || !self.tried.insert(candidate.clone()) {
            return;
        }
        if self.dictionary.contains(&candidate) {
            self.found.push(candidate);
        }
    }
}

/// Swap each adjacent character pair.
fn generate_transpositions(word: &[char], status: &mut SuggestionStatus<'_>) {
    for i in 0..word.len().saturating_sub(1) {
        if status.is_full() {
            return;
        }
        let mut candidate = word.to_vec();
        candidate.swap(i, i + 1);
        status.offer(candidate.into_iter().collect());
    }
}

/// Delete each character in turn.
fn generate_deletions(word: &[char], status: &mut SuggestionStatus<'_>) {
    for i in 0..word.len() {
        if status.is_full() {
            return;
        }
        let mut candidate = word.to_vec();
        candidate.remove(i);
        status.offer(candidate.into_iter().collect());
    }
}

/// Replace each character with every letter.
fn generate_replacements(word: &[char], status: &mut SuggestionStatus<'_>) {
    for i in 0..word.len() {
        for letter in b'a'..=b'z' {
            if status.is_full() {
                return;
            }
            let letter = letter as char;
            if word[i] == letter {
                continue;
            }
            let mut candidate = word.to_vec();
            candidate[i] = letter;
            status.offer(candidate.into_iter().collect());
        }
    }
}

/// Insert every letter at each position.
fn generate_insertions(word: &[char], status: &mut SuggestionStatus<'_>) {
    for i in 0..=word.len() {
        for letter in b'a'..=b'z' {
            if status.is_full() {
                return;
            }
            let mut candidate = word.to_vec();
            candidate.insert(i, letter as char);
            status.offer(candidate.into_iter().collect());
        }
    }
}

/// Carry the original word's leading capitalization over to a suggestion.
fn restore_case(original: &str, candidate: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        candidate.to_string()
    }
}
