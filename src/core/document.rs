// Parsed backend response plus pointer-addressed field access.
// A document whose body failed to parse has no tree; every accessor then reports absent/empty.
use crate::core::checksum::ChecksumKind;
use crate::core::options::DecodeOptions;
use crate::core::pointer::{parse_index, split_last};
use crate::json::parse::{self, ParseFailureCategory};
use serde_json::Value;
use std::error::Error as StdError;
use std::sync::Arc;

type ParseSource = Arc<dyn StdError + Send + Sync>;

const STATUS_PATH: &str = "/status";
const DESCRIPTION_PATH: &str = "/description";

#[derive(Clone, Debug)]
pub struct ParseFailure {
    category: ParseFailureCategory,
    message: String,
    source: Option<ParseSource>,
}

impl ParseFailure {
    fn new(category: ParseFailureCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            source: None,
        }
    }

    fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        let source: ParseSource = Arc::new(source);
        self.source = Some(source);
        self
    }

    /// Underlying decoder error, when one produced this failure.
    pub fn source(&self) -> Option<&ParseSource> {
        self.source.as_ref()
    }

    pub fn category(&self) -> ParseFailureCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self, context: &str) -> String {
        parse::hint_for_category(self.category, context)
    }
}

/// Outcome of [`ResponseDocument::stringify_object`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StringifiedObject {
    /// The path resolved to an object; compact JSON text of it.
    Text(String),
    /// The path resolved to something other than an object.
    NotObject,
    /// The path did not resolve.
    Absent,
}

impl StringifiedObject {
    /// Only a present non-object counts as failure; an absent path is not one.
    pub fn is_success(&self) -> bool {
        !matches!(self, StringifiedObject::NotObject)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            StringifiedObject::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            StringifiedObject::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResponseDocument {
    http_status: i64,
    header_text: String,
    body_text: String,
    tree: Option<Value>,
    parse_failure: Option<ParseFailure>,
    checksum: ChecksumKind,
}

impl ResponseDocument {
    pub fn new(
        http_status: i64,
        header_text: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self::with_options(http_status, header_text, body_text, &DecodeOptions::default())
    }

    pub fn with_options(
        http_status: i64,
        header_text: impl Into<String>,
        body_text: impl Into<String>,
        options: &DecodeOptions,
    ) -> Self {
        let body_text = body_text.into();
        let (tree, parse_failure) = decode_body(body_text.as_bytes(), options);
        Self {
            http_status,
            header_text: header_text.into(),
            body_text,
            tree,
            parse_failure,
            checksum: options.checksum,
        }
    }

    /// Builds a document from raw transport bytes.
    pub fn from_bytes(http_status: i64, header: &[u8], body: &[u8]) -> Self {
        Self::from_bytes_with_options(http_status, header, body, &DecodeOptions::default())
    }

    pub fn from_bytes_with_options(
        http_status: i64,
        header: &[u8],
        body: &[u8],
        options: &DecodeOptions,
    ) -> Self {
        let header_text = String::from_utf8_lossy(header).into_owned();
        match std::str::from_utf8(body) {
            Ok(text) => Self::with_options(http_status, header_text, text, options),
            Err(err) => Self {
                http_status,
                header_text,
                body_text: String::from_utf8_lossy(body).into_owned(),
                tree: None,
                parse_failure: Some(
                    ParseFailure::new(
                        ParseFailureCategory::Utf8,
                        format!("body is not valid UTF-8: {err}"),
                    )
                    .with_source(err),
                ),
                checksum: options.checksum,
            },
        }
    }

    pub fn has_parse_error(&self) -> bool {
        self.parse_failure.is_some()
    }

    pub fn parse_failure(&self) -> Option<&ParseFailure> {
        self.parse_failure.as_ref()
    }

    pub fn parse_error_message(&self) -> Option<&str> {
        self.parse_failure.as_ref().map(ParseFailure::message)
    }

    pub fn http_status(&self) -> i64 {
        self.http_status
    }

    pub fn is_http_status_ok(&self) -> bool {
        (200..300).contains(&self.http_status)
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    pub(crate) fn checksum_kind(&self) -> ChecksumKind {
        self.checksum
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        self.tree.as_ref()?.pointer(path)
    }

    pub fn fetch_i64(&self, path: &str) -> Option<i64> {
        self.lookup(path)?.as_i64()
    }

    pub fn fetch_string(&self, path: &str) -> Option<String> {
        self.lookup(path)?.as_str().map(str::to_owned)
    }

    pub fn fetch_status(&self) -> Option<i64> {
        self.fetch_i64(STATUS_PATH)
    }

    pub fn fetch_description(&self) -> Option<String> {
        self.fetch_string(DESCRIPTION_PATH)
    }

    pub fn stringify_object(&self, path: &str) -> StringifiedObject {
        match self.lookup(path) {
            Some(value @ Value::Object(_)) => StringifiedObject::Text(value.to_string()),
            Some(_) => StringifiedObject::NotObject,
            None => StringifiedObject::Absent,
        }
    }

    /// Member names in the order the backend declared them.
    pub fn fetch_object_keys(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// String elements of an array; non-string elements are skipped.
    pub fn fetch_string_array(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Removes the value at `path`. Returns whether anything was removed.
    /// The raw body text is left untouched.
    pub fn erase_field(&mut self, path: &str) -> bool {
        let Some((parent, leaf)) = split_last(path) else {
            return false;
        };
        let Some(parent) = self.tree.as_mut().and_then(|tree| tree.pointer_mut(parent)) else {
            return false;
        };
        match parent {
            Value::Object(map) => map.shift_remove(&leaf).is_some(),
            Value::Array(items) => match parse_index(&leaf) {
                Some(idx) if idx < items.len() => {
                    items.remove(idx);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }
}

fn decode_body(body: &[u8], options: &DecodeOptions) -> (Option<Value>, Option<ParseFailure>) {
    if let Some(limit) = options.max_body_bytes {
        if body.len() > limit {
            let failure = ParseFailure::new(
                ParseFailureCategory::TooLarge,
                format!("body of {} bytes exceeds limit of {limit} bytes", body.len()),
            );
            return (None, Some(failure));
        }
    }
    match parse::from_slice(body) {
        Ok(tree) => (Some(tree), None),
        Err(err) => {
            let failure = ParseFailure::new(parse::categorize_error(&err), err.to_string())
                .with_source(err);
            (None, Some(failure))
        }
    }
}
