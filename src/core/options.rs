// Decoder options supplied by the host configuration layer.
use crate::core::checksum::ChecksumKind;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Bodies longer than this are recorded as a parse failure without being parsed.
    pub max_body_bytes: Option<usize>,
    /// Algorithm used to verify update package checksums.
    pub checksum: ChecksumKind,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    pub fn with_checksum(mut self, checksum: ChecksumKind) -> Self {
        self.checksum = checksum;
        self
    }
}
