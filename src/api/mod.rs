//! Purpose: Define the stable public Rust API boundary for backend response decoding.
//! Exports: Document, extraction, verification, and error types used by agent channels.
//! Role: Public, additive-only surface; hides parser internals.
//! Invariants: Every operation reachable here returns a value for any input; none panic.
//! Invariants: Only the verification path emits log events.

pub use crate::core::checksum::{ChecksumAlgorithm, ChecksumKind, Md5Checksum, Sha256Checksum};
pub use crate::core::document::{ParseFailure, ResponseDocument, StringifiedObject};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::options::DecodeOptions;
pub use crate::core::package::UpdatePackage;
pub use crate::core::pointer::{escape_token, join_pointer};
pub use crate::core::verify::ErrorCategory;
pub use crate::core::whitelist::WhitelistTable;
pub use crate::json::parse::ParseFailureCategory;
