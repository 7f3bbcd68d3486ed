//! The occurrence aggregator.
//!
//! Folds the scanner's occurrence stream into one entry per distinct
//! misspelled word. Keying is exact and case-sensitive, entries iterate in
//! first-seen order, and the oracle is consulted once per new word - later
//! occurrences reuse the suggestions captured at first encounter.

use serde::Serialize;
use typoscan_core::collections::OrderedMap;
use typoscan_scanner::Occurrence;
use typoscan_speller::{SpellingOracle, Whitelist};

/// One distinct misspelled word and everywhere it occurs.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedEntry<'s> {
    /// The identifier text; unique key across all entries.
    pub word: &'s str,
    /// Number of occurrences; always equals `occurrences.len()`.
    pub count: usize,
    /// Ordered corrections, captured at the word's first encounter.
    pub suggestions: Vec<String>,
    /// Every site the word occurs at, in discovery order.
    pub occurrences: Vec<OccurrenceSite<'s>>,
}

/// A single site of a misspelled word.
#[derive(Debug, Clone, Serialize)]
pub struct OccurrenceSite<'s> {
    /// 1-based line number.
    pub line: u32,
    /// 0-based byte column within the line.
    pub column: u32,
    /// The full text of the source line, borrowed from the source. Empty
    /// when the occurrence's line is beyond the known line count.
    pub snippet: &'s str,
}

/// Aggregates identifier occurrences into per-word entries.
pub struct Aggregator<'o> {
    whitelist: Whitelist,
    oracle: &'o dyn SpellingOracle,
}

impl<'o> Aggregator<'o> {
    /// The whitelist is an immutable configuration value fixed at
    /// construction; the oracle is an injected capability.
    pub fn new(whitelist: Whitelist, oracle: &'o dyn SpellingOracle) -> Self {
        Self { whitelist, oracle }
    }

    /// Fold an occurrence stream into aggregated entries.
    ///
    /// Stream order is discovery order from the scanner; the returned
    /// entries preserve first-seen order, not any sorted order.
    pub fn aggregate<'s>(
        &self,
        occurrences: &[Occurrence<'s>],
        source_lines: &[&'s str],
    ) -> Vec<AggregatedEntry<'s>> {
        let mut entries: OrderedMap<&'s str, AggregatedEntry<'s>> = OrderedMap::new();

        for occurrence in occurrences {
            // Whitelist first: whitelisted words never reach the oracle.
            if self.whitelist.contains(occurrence.text) {
                continue;
            }
            let site = OccurrenceSite {
                line: occurrence.line,
                column: occurrence.column,
                snippet: source_lines
                    .get(occurrence.line.saturating_sub(1) as usize)
                    .copied()
                    .unwrap_or(""),
            };
            match entries.get_mut(&occurrence.text) {
                Some(entry) => {
                    entry.count += 1;
                    entry.occurrences.push(site);
                }
                None => {
                    let suggestions = self.oracle.suggest(occurrence.text);
                    if suggestions.is_empty() {
                        // Considered correctly spelled; no entry, even if a
                        // different casing of this word was flagged.
                        continue;
                    }
                    entries.insert(
                        occurrence.text,
                        AggregatedEntry {
                            word: occurrence.text,
                            count: 1,
                            suggestions,
                            occurrences: vec![site],
                        },
                    );
                }
            }
        }

        entries.into_values().collect()
    }
}
