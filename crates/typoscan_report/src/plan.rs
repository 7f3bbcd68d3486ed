//! The per-line annotation plan.
//!
//! Groups every occurrence from every aggregated entry by line number and
//! sorts each line's marks by descending column. The sort is the explicit
//! ordering step the splicer depends on: inserting a marker at a smaller
//! column shifts every offset to its right, so marks must be consumed
//! right-to-left for recorded columns to stay valid.

use typoscan_analyzer::AggregatedEntry;
use typoscan_core::collections::MultiMap;

/// One planned marker: a flagged word at a byte column, with the
/// suggestions to attach to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMark<'a> {
    pub word: &'a str,
    pub column: u32,
    pub suggestions: &'a [String],
}

/// Build the line -> marks plan for a report, marks sorted by descending
/// column within each line.
pub fn annotation_plan<'a>(entries: &'a [AggregatedEntry<'_>]) -> MultiMap<u32, LineMark<'a>> {
    let mut plan: MultiMap<u32, LineMark<'a>> = MultiMap::new();
    for entry in entries {
        for site in &entry.occurrences {
            plan.insert(
                site.line,
                LineMark {
                    word: entry.word,
                    column: site.column,
                    suggestions: &entry.suggestions,
                },
            );
        }
    }
    for marks in plan.values_mut() {
        marks.sort_by(|a, b| b.column.cmp(&a.column));
    }
    plan
}
