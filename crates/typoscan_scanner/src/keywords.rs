//! Reserved and contextual keyword recognition.
//!
//! The scanner reports identifiers the way an AST walk over `Identifier`
//! nodes would, so keywords are consumed without being reported. The table
//! covers ECMAScript reserved words, literal keywords, and the contextual
//! keywords TypeScript treats as such in declaration positions.

/// Whether the given identifier-shaped text is a keyword.
pub fn is_keyword(text: &str) -> bool {
    matches!(
        text,
        // Reserved words
        "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "new"
            | "return"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            // Literal keywords
            | "true"
            | "false"
            | "null"
            // Strict-mode reserved words
            | "implements"
            | "interface"
            | "let"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "static"
            | "yield"
            // Contextual keywords
            | "abstract"
            | "as"
            | "asserts"
            | "async"
            | "await"
            | "declare"
            | "from"
            | "get"
            | "is"
            | "keyof"
            | "namespace"
            | "of"
            | "readonly"
            | "satisfies"
            | "set"
            | "type"
    )
}

/// Whether a `/` immediately after this keyword starts a regex literal.
/// `this` and `super` are expression positions, so a following slash is
/// division; every other keyword is followed by an operand.
pub fn keyword_allows_regex(text: &str) -> bool {
    !matches!(text, "this" | "super")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_words() {
        assert!(is_keyword("const"));
        assert!(is_keyword("function"));
        assert!(is_keyword("return"));
        assert!(!is_keyword("console"));
        assert!(!is_keyword("wrod"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_keyword("Const"));
        assert!(!is_keyword("RETURN"));
    }

    #[test]
    fn test_regex_position() {
        assert!(keyword_allows_regex("return"));
        assert!(keyword_allows_regex("typeof"));
        assert!(!keyword_allows_regex("this"));
    }
}
