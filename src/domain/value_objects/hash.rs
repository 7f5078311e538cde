//! Content Hash Value Object
//!
//! A validated, immutable hash representing the content of an artifact.
//! Used for change detection and for the binary's reference digest.

use std::fmt;
use std::io::Read;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a lower-case SHA-256 hex string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Number of hex characters in a SHA-256 digest
    pub const HEX_LEN: usize = 64;

    /// Create a new ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        let hex = raw_hash
            .strip_prefix(Self::PREFIX)
            .unwrap_or(raw_hash)
            .to_ascii_lowercase();
        Self(format!("{}{}", Self::PREFIX, hex))
    }

    /// Parse a reference digest as shipped next to the binary.
    ///
    /// Accepts surrounding whitespace, upper-case hex and an optional prefix.
    /// Returns `None` unless the value is exactly one SHA-256 hex string.
    pub fn parse_reference(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed);
        if hex.len() == Self::HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self::new(hex))
        } else {
            None
        }
    }

    /// Create a ContentHash by computing SHA-256 of bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Create a ContentHash by streaming a reader through SHA-256
    pub fn from_reader<R: Read>(mut reader: R) -> std::io::Result<Self> {
        let mut hasher = Sha256::new();
        let mut buf = [0u8; 64 * 1024];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(Self(format!("{}{:x}", Self::PREFIX, hasher.finalize())))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check if this hash matches another
    pub fn matches(&self, other: &ContentHash) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
