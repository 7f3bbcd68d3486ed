//! typoscan_analyzer: Occurrence aggregation and pipeline orchestration.
//!
//! Coordinates the scan -> aggregate half of the pipeline: the scanner
//! yields identifier occurrences, the whitelist and oracle decide which
//! ones are typos, and the aggregator folds them into one entry per
//! distinct misspelled word.

mod aggregate;

pub use aggregate::{AggregatedEntry, Aggregator, OccurrenceSite};

use typoscan_speller::{SpellingOracle, Whitelist};

/// The result of analyzing one source file.
///
/// Entries borrow their snippets from the source text, so the analysis
/// lives no longer than the source it was produced from.
#[derive(Debug)]
pub struct Analysis<'s> {
    /// One entry per distinct misspelled word, in first-seen order.
    pub entries: Vec<AggregatedEntry<'s>>,
    /// The source split into lines, for the renderer.
    pub source_lines: Vec<&'s str>,
}

impl Analysis<'_> {
    /// Total number of flagged occurrences across all entries.
    pub fn occurrence_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the full scan -> aggregate pipeline over one source text.
pub fn analyze_source<'s>(
    source: &'s str,
    whitelist: Whitelist,
    oracle: &dyn SpellingOracle,
) -> Analysis<'s> {
    let occurrences = typoscan_scanner::scan_identifiers(source);
    // split('\n') rather than lines(): occurrence lines are 1-based over
    // physical newlines, and the renderer re-emits every line verbatim.
    let source_lines: Vec<&str> = source.split('\n').collect();
    let aggregator = Aggregator::new(whitelist, oracle);
    let entries = aggregator.aggregate(&occurrences, &source_lines);
    Analysis {
        entries,
        source_lines,
    }
}
