//! HTML emission for the annotated document.
//!
//! Dark-themed, self-contained report: each source line is prefixed with
//! its 1-based number, and each marked identifier becomes a highlighted
//! span whose tooltip lists the word and its suggestions. The document is
//! built fully in memory and written with a single write call, so a failed
//! write never leaves a partial report behind.

use crate::document::{AnnotatedDocument, Segment};
use crate::error::ReportError;
use std::fmt::Write as _;
use std::path::Path;

const STYLE: &str = r#"
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      background-color: #1e1e1e;
      color: #d4d4d4;
      font-family: Consolas, "Courier New", monospace;
    }

    header {
      background: #2d2d2d;
      padding: 1rem;
      text-align: center;
      border-bottom: 1px solid #3c3c3c;
    }

    header h1 {
      color: #ffffff;
      margin: 0;
    }

    .container {
      max-width: 1000px;
      margin: 1rem auto;
      padding: 0 1rem;
    }

    pre {
      background: #252526;
      padding: 1rem;
      overflow-x: auto;
      border-radius: 4px;
      line-height: 1.5;
      margin-top: 1rem;
      color: #d4d4d4;
    }

    .line {
      display: block;
      white-space: pre;
    }

    .line-number {
      color: #858585;
      margin-right: 1rem;
      user-select: none;
    }

    .error {
      background-color: #c75e5e;
      color: #ffffff;
      padding: 1px 2px;
      border-radius: 2px;
      cursor: pointer;
    }

    .tooltip {
      position: relative;
      display: inline-block;
    }

    .tooltip .tooltiptext {
      visibility: hidden;
      max-width: 300px;
      background-color: #3c3c3c;
      color: #ffffff;
      text-align: left;
      border-radius: 4px;
      padding: 0.5rem;
      position: absolute;
      z-index: 999;
      top: 50%;
      left: 105%;
      transform: translateY(-50%);
      opacity: 0;
      transition: opacity 0.2s ease-in-out;
      font-size: 0.9rem;
      border: 1px solid #555;
      box-shadow: 0 2px 6px rgba(0,0,0,0.4);
      white-space: normal;
    }

    .tooltip:hover .tooltiptext {
      visibility: visible;
      opacity: 1;
    }

    .tooltip-title {
      font-weight: bold;
      margin-bottom: 0.2rem;
    }

    .suggestion-list {
      margin: 0.3rem 0 0 1rem;
      padding: 0;
    }

    .suggestion-list li {
      list-style: disc;
      margin-left: 1rem;
    }
"#;

/// Render the annotated document as a complete HTML page.
pub fn render_html(file_name: &str, document: &AnnotatedDocument<'_>) -> String {
    let title = escape_html(file_name);
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <title>Report for {title}</title>\n  <style>{STYLE}</style>\n</head>\n<body>\n  \
         <header>\n    <h1>Report for {title}</h1>\n  </header>\n  \
         <div class=\"container\">\n    <pre>\n"
    );

    for line in &document.lines {
        let _ = write!(
            html,
            "<span class=\"line\"><span class=\"line-number\">{:>3}</span> ",
            line.number
        );
        for segment in &line.segments {
            match segment {
                Segment::Text(text) => html.push_str(&escape_html(text)),
                Segment::Marked { word, suggestions } => {
                    let word = escape_html(word);
                    let _ = write!(
                        html,
                        "<span class=\"tooltip error\">{word}<span class=\"tooltiptext\">\
                         <div class=\"tooltip-title\">Word: {word}</div>\
                         <div>Suggestions:</div><ul class=\"suggestion-list\">"
                    );
                    for suggestion in suggestions.iter() {
                        let _ = write!(html, "<li>{}</li>", escape_html(suggestion));
                    }
                    html.push_str("</ul></span></span>");
                }
            }
        }
        html.push_str("</span>\n");
    }

    html.push_str("    </pre>\n  </div>\n</body>\n</html>\n");
    html
}

/// Write a rendered report to disk in one call.
pub fn write_report(path: &Path, html: &str) -> Result<(), ReportError> {
    std::fs::write(path, html).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Escape text for embedding in HTML content and attribute positions.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AnnotatedLine, Segment};

    fn one_line_document(segments: Vec<Segment<'_>>) -> AnnotatedDocument<'_> {
        AnnotatedDocument {
            lines: vec![AnnotatedLine {
                number: 1,
                segments,
            }],
        }
    }

    #[test]
    fn test_source_text_is_escaped() {
        let document = one_line_document(vec![Segment::Text("if (a < b && c > \"d\")")]);
        let html = render_html("x.js", &document);
        assert!(html.contains("if (a &lt; b &amp;&amp; c &gt; &quot;d&quot;)"));
        assert!(!html.contains("a < b && c"));
    }

    #[test]
    fn test_marked_word_carries_tooltip() {
        let suggestions = vec!["word".to_string(), "wood".to_string()];
        let document = one_line_document(vec![
            Segment::Text("const "),
            Segment::Marked {
                word: "wrod",
                suggestions: &suggestions,
            },
        ]);
        let html = render_html("x.js", &document);
        assert!(html.contains("<span class=\"tooltip error\">wrod"));
        assert!(html.contains("Word: wrod"));
        assert!(html.contains("<li>word</li><li>wood</li>"));
    }

    #[test]
    fn test_clean_line_has_no_markup() {
        let document = one_line_document(vec![Segment::Text("let ok = 1;")]);
        let html = render_html("x.js", &document);
        assert!(html.contains("let ok = 1;"));
        assert!(!html.contains("tooltip error"));
    }

    #[test]
    fn test_line_numbers_prefixed() {
        let document = AnnotatedDocument {
            lines: vec![
                AnnotatedLine {
                    number: 1,
                    segments: vec![Segment::Text("a")],
                },
                AnnotatedLine {
                    number: 2,
                    segments: Vec::new(),
                },
            ],
        };
        let html = render_html("x.js", &document);
        assert!(html.contains("<span class=\"line-number\">  1</span>"));
        assert!(html.contains("<span class=\"line-number\">  2</span>"));
    }

    #[test]
    fn test_title_uses_file_name() {
        let document = one_line_document(Vec::new());
        let html = render_html("lib/ma<in>.js", &document);
        assert!(html.contains("Report for lib/ma&lt;in&gt;.js"));
    }
}
