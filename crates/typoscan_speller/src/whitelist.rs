//! The identifier whitelist.
//!
//! Well-known API and runtime names are never reported as typos, whatever
//! the oracle thinks of them. The set is an immutable value handed to the
//! aggregator at construction time; membership is exact and case-sensitive.

use typoscan_core::collections::FxHashSet;

/// Names to ignore during aggregation (commonly used method names, global
/// objects, and runtime functions).
const BUILTIN: &[&str] = &[
    // Array methods
    "forEach", "map", "filter", "reduce", "push", "pop", "shift", "unshift",
    "slice", "splice", "concat", "join", "indexOf", "lastIndexOf", "includes",
    "find", "findIndex", "sort", "reverse", "every", "some", "fill", "copyWithin",
    // String methods
    "charAt", "charCodeAt", "endsWith", "match", "replace", "search", "split",
    "startsWith", "substr", "substring", "toLowerCase", "toUpperCase", "trim",
    "trimStart", "trimEnd", "padStart", "padEnd",
    // Object methods
    "hasOwnProperty", "isPrototypeOf", "propertyIsEnumerable", "toLocaleString",
    "toString", "valueOf", "assign", "create", "entries", "freeze", "keys", "seal",
    "values", "getPrototypeOf", "setPrototypeOf", "defineProperty", "defineProperties",
    // Math methods
    "abs", "acos", "asin", "atan", "atan2", "ceil", "cos", "exp", "floor", "log",
    "max", "min", "pow", "random", "round", "sin", "sqrt", "tan", "trunc", "clz32", "imul",
    // Date methods
    "getDate", "getDay", "getFullYear", "getHours", "getMilliseconds", "getMinutes",
    "getMonth", "getSeconds", "getTime", "getTimezoneOffset", "getUTCDate", "getUTCDay",
    "getUTCFullYear", "getUTCHours", "getUTCMilliseconds", "getUTCMinutes", "getUTCMonth",
    "getUTCSeconds", "setDate", "setFullYear", "setHours", "setMilliseconds", "setMinutes",
    "setMonth", "setSeconds", "setTime", "toDateString", "toISOString", "toJSON",
    "toLocaleDateString", "toLocaleTimeString", "toTimeString", "toUTCString",
    // Global objects and functions
    "Array", "Boolean", "Date", "Error", "Function", "JSON", "Math", "Number",
    "Object", "RegExp", "String", "Symbol", "Map", "Set", "WeakMap", "WeakSet",
    "Promise", "Intl", "BigInt", "Proxy", "Reflect",
    // Node.js specific globals
    "require", "module", "exports", "__dirname", "__filename", "Buffer", "process",
    "console", "setTimeout", "clearTimeout", "setInterval", "clearInterval",
    "setImmediate", "clearImmediate",
    // Browser-specific globals
    "window", "document", "navigator", "alert", "confirm", "prompt",
    // Console methods
    "warn", "error", "info", "debug", "assert", "dir", "trace", "time", "timeEnd",
    // Other common terms
    "parseInt", "parseFloat", "isNaN", "isFinite", "eval", "encodeURI",
    "encodeURIComponent", "decodeURI", "decodeURIComponent",
];

/// An immutable set of identifier names the aggregator never reports.
#[derive(Debug, Clone)]
pub struct Whitelist {
    words: FxHashSet<&'static str>,
}

impl Whitelist {
    /// The built-in whitelist of common API and runtime names.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.iter().copied().collect(),
        }
    }

    /// An empty whitelist (nothing suppressed).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a whitelist from an explicit word set.
    pub fn from_words(words: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_members() {
        let whitelist = Whitelist::builtin();
        assert!(whitelist.contains("forEach"));
        assert!(whitelist.contains("console"));
        assert!(whitelist.contains("log"));
        assert!(whitelist.contains("__dirname"));
        assert!(!whitelist.contains("wrod"));
    }

    #[test]
    fn test_case_sensitive() {
        let whitelist = Whitelist::builtin();
        assert!(whitelist.contains("Array"));
        assert!(!whitelist.contains("array"));
        assert!(!whitelist.contains("foreach"));
    }

    #[test]
    fn test_empty() {
        let whitelist = Whitelist::empty();
        assert!(whitelist.is_empty());
        assert!(!whitelist.contains("console"));
    }
}
