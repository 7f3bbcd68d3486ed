//! typoscan_scanner: Identifier occurrence scanner for JavaScript/TypeScript
//! source text.
//!
//! Unlike a full lexer, the scanner only reports identifiers: comments,
//! string/template/regex/numeric literals, punctuation and reserved words
//! are consumed and discarded. Identifiers inside template substitutions
//! (`${...}`) are reported; template text is not. The scanner never fails
//! on malformed input - unterminated literals end at end of input.

mod keywords;
mod occurrence;
mod scanner;

pub use occurrence::Occurrence;
pub use scanner::IdentScanner;

use typoscan_core::text::LineMap;

/// Scan source text and return every identifier occurrence with its
/// 1-based line and 0-based byte column, in source order.
pub fn scan_identifiers(source: &str) -> Vec<Occurrence<'_>> {
    let line_map = LineMap::new(source);
    let mut scanner = IdentScanner::new(source);
    let mut occurrences = Vec::new();
    while let Some(span) = scanner.next_identifier() {
        let pos = line_map.line_col_of(span.start);
        occurrences.push(Occurrence {
            text: &source[span.to_range()],
            line: pos.line,
            column: pos.column,
        });
    }
    occurrences
}
