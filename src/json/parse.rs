//! Purpose: Provide the internal JSON decode entrypoint for response bodies.
//! Exports: `from_slice`, `ParseFailureCategory`, `categorize_error`, `hint_for_category`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Categories are derived from the parser error class first, message second.
//! Notes: Error mapping to crate errors is done by callsites so context stays explicit.

use serde_json::Value;
use serde_json::error::Category;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Truncated,
    NumericRange,
    DepthLimit,
    Utf8,
    TooLarge,
    Unknown,
}

impl ParseFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::TooLarge => "too-large",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ParseFailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn from_slice(input: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Eof => ParseFailureCategory::Truncated,
        Category::Syntax | Category::Data => categorize_message(&err.to_string()),
        Category::Io => ParseFailureCategory::Unknown,
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let message = message.to_ascii_lowercase();
    if message.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if message.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if message.contains("utf-8")
        || message.contains("unicode")
        || message.contains("surrogate")
    {
        ParseFailureCategory::Utf8
    } else if message.contains("expected")
        || message.contains("trailing")
        || message.contains("invalid")
        || message.contains("key must be a string")
    {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_category(category: ParseFailureCategory, context: &str) -> String {
    format!("parse category: {category}; context: {context}")
}
