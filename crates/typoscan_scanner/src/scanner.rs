//! The identifier scanner.
//!
//! A stripped-down JS/TS lexer that walks source text by byte index and
//! yields the spans of identifier tokens. Everything else - trivia,
//! literals, punctuation, keywords - is consumed and discarded. Byte
//! positions keep the scanner's columns in agreement with the renderer's
//! byte-range splicing.

use crate::keywords::{is_keyword, keyword_allows_regex};
use typoscan_core::text::TextSpan;

/// Scans JS/TS source text for identifier occurrences.
pub struct IdentScanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Current byte position in the text.
    pos: usize,
    /// Current `{` nesting depth.
    brace_depth: u32,
    /// Brace depths at which enclosing template literals resume. A `}` seen
    /// at the depth on top of the stack closes a `${...}` substitution.
    template_stack: Vec<u32>,
    /// Whether a `/` at the next token position starts a regex literal.
    regex_allowed: bool,
}

impl<'a> IdentScanner<'a> {
    /// Create a new scanner for the given source text. A leading shebang
    /// line (`#!/usr/bin/env node`) is skipped up front.
    pub fn new(text: &'a str) -> Self {
        let mut scanner = Self {
            text,
            pos: 0,
            brace_depth: 0,
            template_stack: Vec::new(),
            regex_allowed: true,
        };
        scanner.skip_shebang();
        scanner
    }

    /// Advance to the next identifier token and return its span, or `None`
    /// at end of input.
    pub fn next_identifier(&mut self) -> Option<TextSpan> {
        loop {
            self.skip_trivia();
            let ch = self.cur()?;
            match ch {
                '\'' | '"' => {
                    self.skip_string(ch);
                    self.regex_allowed = false;
                }
                '`' => {
                    self.pos += 1;
                    self.skip_template_text();
                }
                '{' => {
                    self.pos += 1;
                    self.brace_depth += 1;
                    self.regex_allowed = true;
                }
                '}' => {
                    self.pos += 1;
                    if self.template_stack.last() == Some(&self.brace_depth) {
                        // Closes a `${...}` substitution: resume template text.
                        self.template_stack.pop();
                        self.skip_template_text();
                    } else {
                        self.brace_depth = self.brace_depth.saturating_sub(1);
                        self.regex_allowed = false;
                    }
                }
                '/' => {
                    if self.regex_allowed {
                        self.skip_regex();
                        self.regex_allowed = false;
                    } else {
                        self.pos += 1;
                        self.regex_allowed = true;
                    }
                }
                ')' | ']' => {
                    self.pos += 1;
                    self.regex_allowed = false;
                }
                '0'..='9' => {
                    self.skip_number();
                    self.regex_allowed = false;
                }
                '.' if self.char_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit()) => {
                    self.skip_number();
                    self.regex_allowed = false;
                }
                c if is_identifier_start(c) => {
                    let start = self.pos;
                    self.bump(c);
                    while let Some(part) = self.cur() {
                        if !is_identifier_part(part) {
                            break;
                        }
                        self.bump(part);
                    }
                    let text = &self.text[start..self.pos];
                    if is_keyword(text) {
                        self.regex_allowed = keyword_allows_regex(text);
                    } else {
                        self.regex_allowed = false;
                        return Some(TextSpan::from_bounds(start as u32, self.pos as u32));
                    }
                }
                _ => {
                    // Operators, punctuation, and any stray byte: a regex
                    // may follow (`x = /re/`, `f(/re/)`, `a, /re/`).
                    self.bump(ch);
                    self.regex_allowed = true;
                }
            }
        }
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Look at the character at the given byte position without advancing.
    #[inline]
    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..)?.chars().next()
    }

    /// Look at the character at the current position.
    #[inline]
    fn cur(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// Advance past the given character.
    #[inline]
    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    // ========================================================================
    // Trivia and literal skipping
    // ========================================================================

    /// Skip a shebang line at the very beginning of the file.
    fn skip_shebang(&mut self) {
        if self.text.starts_with("#!") {
            self.pos = 2;
            while let Some(ch) = self.cur() {
                if is_line_break(ch) {
                    break;
                }
                self.bump(ch);
            }
        }
    }

    /// Skip whitespace, line breaks, and comments.
    fn skip_trivia(&mut self) {
        loop {
            let Some(ch) = self.cur() else { return };
            match ch {
                c if is_line_break(c) || is_white_space_single_line(c) => {
                    self.bump(c);
                }
                '/' if self.char_at(self.pos + 1) == Some('/') => {
                    self.pos += 2;
                    while let Some(c) = self.cur() {
                        if is_line_break(c) {
                            break;
                        }
                        self.bump(c);
                    }
                }
                '/' if self.char_at(self.pos + 1) == Some('*') => {
                    self.pos += 2;
                    loop {
                        match self.cur() {
                            None => return,
                            Some('*') if self.char_at(self.pos + 1) == Some('/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(c) => self.bump(c),
                        }
                    }
                }
                _ => return,
            }
        }
    }

    /// Skip a string literal. An unterminated string ends at the line break
    /// or end of input.
    fn skip_string(&mut self, quote: char) {
        self.pos += 1;
        while let Some(ch) = self.cur() {
            match ch {
                c if c == quote => {
                    self.pos += 1;
                    return;
                }
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.cur() {
                        self.bump(escaped);
                    }
                }
                c if is_line_break(c) => return,
                c => self.bump(c),
            }
        }
    }

    /// Skip template literal text up to the closing backtick or into the
    /// next `${` substitution. Identifiers inside substitutions are scanned
    /// by the main loop; the `}` handler resumes the template afterwards.
    fn skip_template_text(&mut self) {
        loop {
            let Some(ch) = self.cur() else { return };
            match ch {
                '`' => {
                    self.pos += 1;
                    self.regex_allowed = false;
                    return;
                }
                '$' if self.char_at(self.pos + 1) == Some('{') => {
                    self.pos += 2;
                    self.template_stack.push(self.brace_depth);
                    self.regex_allowed = true;
                    return;
                }
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.cur() {
                        self.bump(escaped);
                    }
                }
                c => self.bump(c),
            }
        }
    }

    /// Skip a regex literal, including its flags. An unterminated regex
    /// ends at the line break or end of input.
    fn skip_regex(&mut self) {
        self.pos += 1; // after the /
        let mut in_character_class = false;
        while let Some(ch) = self.cur() {
            match ch {
                c if is_line_break(c) => return,
                '\\' => {
                    self.pos += 1;
                    if let Some(escaped) = self.cur() {
                        if !is_line_break(escaped) {
                            self.bump(escaped);
                        }
                    }
                }
                '[' => {
                    in_character_class = true;
                    self.pos += 1;
                }
                ']' => {
                    in_character_class = false;
                    self.pos += 1;
                }
                '/' if !in_character_class => {
                    self.pos += 1;
                    // Flags
                    while let Some(flag) = self.cur() {
                        if !is_identifier_part(flag) {
                            break;
                        }
                        self.bump(flag);
                    }
                    return;
                }
                c => self.bump(c),
            }
        }
    }

    /// Skip a numeric literal: decimal, hex/binary/octal, separators,
    /// exponents, and the bigint suffix. Trailing identifier characters are
    /// consumed so `0xFF` never yields an `FF` identifier.
    fn skip_number(&mut self) {
        let mut prev = '\0';
        while let Some(ch) = self.cur() {
            let consume = match ch {
                c if is_identifier_part(c) => true,
                '.' => self.char_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit()),
                '+' | '-' => {
                    matches!(prev, 'e' | 'E')
                        && self.char_at(self.pos + 1).is_some_and(|c| c.is_ascii_digit())
                }
                _ => false,
            };
            if !consume {
                return;
            }
            prev = ch;
            self.bump(ch);
        }
    }
}

/// Check if a character is a line terminator.
#[inline]
fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Check if a character is whitespace (not line break).
#[inline]
fn is_white_space_single_line(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\t'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
            | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // various spaces
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{FEFF}' // BOM / zero-width no-break space
    )
}

/// Check if a character can start an identifier.
#[inline]
fn is_identifier_start(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can be part of an identifier.
#[inline]
fn is_identifier_part(ch: char) -> bool {
    ch == '_'
        || ch == '$'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idents(source: &str) -> Vec<&str> {
        let mut scanner = IdentScanner::new(source);
        let mut out = Vec::new();
        while let Some(span) = scanner.next_identifier() {
            out.push(&source[span.to_range()]);
        }
        out
    }

    #[test]
    fn test_plain_identifiers() {
        assert_eq!(idents("foo bar _private $dollar"), vec!["foo", "bar", "_private", "$dollar"]);
    }

    #[test]
    fn test_keywords_not_reported() {
        assert_eq!(idents("const wrod = funcion(x)"), vec!["wrod", "funcion", "x"]);
    }

    #[test]
    fn test_comments_skipped() {
        let source = "a // trailing coment\n/* blok */ b";
        assert_eq!(idents(source), vec!["a", "b"]);
    }

    #[test]
    fn test_strings_skipped() {
        assert_eq!(idents(r#"a = "no idents \" here" + b"#), vec!["a", "b"]);
        assert_eq!(idents("a = 'x' + b"), vec!["a", "b"]);
    }

    #[test]
    fn test_template_substitutions_scanned() {
        let source = "`text ${valu} more ${obj.fld}` + after";
        assert_eq!(idents(source), vec!["valu", "obj", "fld", "after"]);
    }

    #[test]
    fn test_nested_braces_in_substitution() {
        let source = "`${ fn({ key: val }) } tail` + end";
        assert_eq!(idents(source), vec!["fn", "key", "val", "end"]);
    }

    #[test]
    fn test_regex_skipped_division_kept() {
        // Regex position: slash after `=` starts a literal.
        assert_eq!(idents("x = /abc/g; y"), vec!["x", "y"]);
        // Division position: slash after an identifier.
        assert_eq!(idents("total / count"), vec!["total", "count"]);
        // Regex after a keyword operand position.
        assert_eq!(idents("return /skip/.test(s)"), vec!["test", "s"]);
    }

    #[test]
    fn test_numbers_skipped() {
        assert_eq!(idents("a = 0xFF + 1_000n * 3.5e+2"), vec!["a"]);
    }

    #[test]
    fn test_shebang_skipped() {
        assert_eq!(idents("#!/usr/bin/env node\nfoo"), vec!["foo"]);
    }

    #[test]
    fn test_unterminated_string() {
        // Must not hang or panic; scanning resumes on the next line.
        assert_eq!(idents("a = \"unterminated\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(idents("caf\u{e9} = 1"), vec!["caf\u{e9}"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(idents("").is_empty());
        assert!(idents("   \n\t  ").is_empty());
    }
}
