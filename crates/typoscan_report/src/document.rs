//! The annotated document: a line-indexed, segment-structured view of the
//! source with markers spliced in by byte range.

use crate::plan::{annotation_plan, LineMark};
use typoscan_analyzer::AggregatedEntry;

/// A piece of one rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Unmarked source text, verbatim.
    Text(&'a str),
    /// A flagged identifier with its ordered suggestions.
    Marked {
        word: &'a str,
        suggestions: &'a [String],
    },
}

/// One source line, split into unmarked text and marked identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine<'a> {
    /// 1-based line number.
    pub number: u32,
    /// Segments in left-to-right order; concatenating their text restores
    /// the original line.
    pub segments: Vec<Segment<'a>>,
}

impl AnnotatedLine<'_> {
    /// Reassemble the original line text.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => *text,
                Segment::Marked { word, .. } => *word,
            })
            .collect()
    }

    /// Whether any identifier on this line is marked.
    pub fn is_marked(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Marked { .. }))
    }
}

/// The full annotated rendering of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedDocument<'a> {
    /// Every source line in order 1..N, annotated or not.
    pub lines: Vec<AnnotatedLine<'a>>,
}

impl AnnotatedDocument<'_> {
    /// Number of lines carrying at least one marker.
    pub fn marked_line_count(&self) -> usize {
        self.lines.iter().filter(|line| line.is_marked()).count()
    }
}

/// Build the annotated document for a report.
///
/// Lines are emitted in source order regardless of whether they carry
/// occurrences; unmarked lines pass through as a single text segment.
pub fn annotate<'a>(
    entries: &'a [AggregatedEntry<'a>],
    source_lines: &[&'a str],
) -> AnnotatedDocument<'a> {
    let plan = annotation_plan(entries);
    let lines = source_lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let number = (index + 1) as u32;
            match plan.get(&number) {
                Some(marks) => annotate_line(number, line, marks),
                None => AnnotatedLine {
                    number,
                    segments: if line.is_empty() {
                        Vec::new()
                    } else {
                        vec![Segment::Text(line)]
                    },
                },
            }
        })
        .collect();
    AnnotatedDocument { lines }
}

/// Splice one line's marks into segments.
///
/// `marks` must be in descending column order (the plan guarantees it).
/// Each marker covers exactly `[column, column + word.len())` on the
/// original line - the recorded byte range, never a text search, so a
/// `log` mark can never land on the `log` inside `login`. A mark whose
/// range is out of bounds, overlaps an already-spliced mark, straddles a
/// char boundary, or no longer matches its word is dropped rather than
/// mis-spliced.
fn annotate_line<'a>(number: u32, line: &'a str, marks: &[LineMark<'a>]) -> AnnotatedLine<'a> {
    let mut segments = Vec::new();
    // Everything at or beyond `cut` has already been pushed.
    let mut cut = line.len();

    for mark in marks {
        let start = mark.column as usize;
        let end = start + mark.word.len();
        if end > cut || !line.is_char_boundary(start) || !line.is_char_boundary(end) {
            continue;
        }
        if &line[start..end] != mark.word {
            continue;
        }
        if end < cut {
            segments.push(Segment::Text(&line[end..cut]));
        }
        segments.push(Segment::Marked {
            word: mark.word,
            suggestions: mark.suggestions,
        });
        cut = start;
    }
    if cut > 0 {
        segments.push(Segment::Text(&line[..cut]));
    }
    segments.reverse();
    AnnotatedLine { number, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typoscan_analyzer::OccurrenceSite;

    fn entry(
        word: &'static str,
        suggestions: &[&str],
        sites: &[(u32, u32)],
    ) -> AggregatedEntry<'static> {
        AggregatedEntry {
            word,
            count: sites.len(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            occurrences: sites
                .iter()
                .map(|&(line, column)| OccurrenceSite {
                    line,
                    column,
                    snippet: "",
                })
                .collect(),
        }
    }

    fn marked_words<'a>(line: &AnnotatedLine<'a>) -> Vec<&'a str> {
        line.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Marked { word, .. } => Some(*word),
                Segment::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_substring_token_marked_by_column_not_search() {
        // `login` contains `log`: only the recorded columns are marked.
        let source = "login = log.info(x)";
        let entries = vec![
            entry("login", &["logic"], &[(1, 0)]),
            entry("log", &["long"], &[(1, 8)]),
        ];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];

        assert_eq!(line.text(), source);
        assert_eq!(marked_words(line), vec!["login", "log"]);
        assert_eq!(
            line.segments,
            vec![
                Segment::Marked {
                    word: "login",
                    suggestions: &entries[0].suggestions,
                },
                Segment::Text(" = "),
                Segment::Marked {
                    word: "log",
                    suggestions: &entries[1].suggestions,
                },
                Segment::Text(".info(x)"),
            ]
        );
    }

    #[test]
    fn test_three_marks_left_offsets_survive() {
        let source = "aa then bb then cc";
        let entries = vec![
            entry("aa", &["a"], &[(1, 0)]),
            entry("bb", &["b"], &[(1, 8)]),
            entry("cc", &["c"], &[(1, 16)]),
        ];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];
        assert_eq!(line.text(), source);
        assert_eq!(marked_words(line), vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_unmarked_lines_pass_through() {
        let entries = vec![entry("wrod", &["word"], &[(2, 0)])];
        let lines = ["clean line", "wrod here", "", "last"];
        let document = annotate(&entries, &lines);

        assert_eq!(document.lines.len(), 4);
        assert_eq!(document.lines[0].segments, vec![Segment::Text("clean line")]);
        assert!(!document.lines[0].is_marked());
        assert!(document.lines[1].is_marked());
        assert!(document.lines[2].segments.is_empty());
        assert_eq!(document.lines[3].segments, vec![Segment::Text("last")]);
        assert_eq!(document.marked_line_count(), 1);
    }

    #[test]
    fn test_same_word_twice_on_one_line() {
        let source = "wrod(wrod)";
        let entries = vec![entry("wrod", &["word"], &[(1, 0), (1, 5)])];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];
        assert_eq!(line.text(), source);
        assert_eq!(marked_words(line), vec!["wrod", "wrod"]);
    }

    #[test]
    fn test_stale_mark_dropped_not_mis_spliced() {
        // A mark whose recorded range no longer holds its word is dropped;
        // the rest of the line still renders.
        let source = "abc wrod";
        let entries = vec![
            entry("wrod", &["word"], &[(1, 4)]),
            entry("zzz", &["z"], &[(1, 0)]),
        ];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];
        assert_eq!(line.text(), source);
        assert_eq!(marked_words(line), vec!["wrod"]);
    }

    #[test]
    fn test_out_of_bounds_mark_dropped() {
        let source = "short";
        let entries = vec![entry("wrod", &["word"], &[(1, 40)])];
        let document = annotate(&entries, &[source]);
        assert_eq!(document.lines[0].text(), source);
        assert!(!document.lines[0].is_marked());
    }

    #[test]
    fn test_mark_at_end_of_line() {
        let source = "x = wrod";
        let entries = vec![entry("wrod", &["word"], &[(1, 4)])];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];
        assert_eq!(
            line.segments,
            vec![
                Segment::Text("x = "),
                Segment::Marked {
                    word: "wrod",
                    suggestions: &entries[0].suggestions,
                },
            ]
        );
    }

    #[test]
    fn test_multibyte_text_before_mark() {
        // Byte columns stay correct past non-ASCII text.
        let source = "/* caf\u{e9} */ wrod";
        let column = source.find("wrod").unwrap() as u32;
        let entries = vec![entry("wrod", &["word"], &[(1, column)])];
        let document = annotate(&entries, &[source]);
        let line = &document.lines[0];
        assert_eq!(line.text(), source);
        assert_eq!(marked_words(line), vec!["wrod"]);
    }
}
