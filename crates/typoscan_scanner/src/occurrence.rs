//! Identifier occurrence records produced by the scanner.

/// A single identifier occurrence in the scanned source.
///
/// Occurrences are transient: the aggregator consumes them immediately and
/// they borrow their text from the source rather than copying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// The identifier's literal spelling.
    pub text: &'a str,
    /// 1-based line number within the source.
    pub line: u32,
    /// 0-based byte offset of the first character on that line.
    pub column: u32,
}
