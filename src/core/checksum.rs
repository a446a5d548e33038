// Content checksums used to verify update packages before they are surfaced.
use md5::Md5;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Computes the textual checksum of package content.
///
/// Implementations must be pure: the same bytes always produce the same string.
pub trait ChecksumAlgorithm {
    fn checksum(&self, content: &[u8]) -> String;
}

impl<F> ChecksumAlgorithm for F
where
    F: Fn(&[u8]) -> String,
{
    fn checksum(&self, content: &[u8]) -> String {
        self(content)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Md5Checksum;

impl ChecksumAlgorithm for Md5Checksum {
    fn checksum(&self, content: &[u8]) -> String {
        lower_hex(&Md5::digest(content))
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sha256Checksum;

impl ChecksumAlgorithm for Sha256Checksum {
    fn checksum(&self, content: &[u8]) -> String {
        lower_hex(&Sha256::digest(content))
    }
}

/// Configurable selection of the built-in algorithms.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumKind {
    #[default]
    Md5,
    Sha256,
}

impl ChecksumKind {
    pub fn algorithm(self) -> &'static dyn ChecksumAlgorithm {
        match self {
            ChecksumKind::Md5 => &Md5Checksum,
            ChecksumKind::Sha256 => &Sha256Checksum,
        }
    }
}

fn lower_hex(digest: &[u8]) -> String {
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
