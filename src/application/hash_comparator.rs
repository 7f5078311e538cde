//! Hash Comparator
//!
//! Compares artifacts by SHA-256 digest. Configs are compared source against
//! destination; the agent binary against the reference digest shipped next to
//! it. Read-only.

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::{DeployError, DeployResult};

pub struct HashComparator<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> HashComparator<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// True when both files have the same content
    pub fn files_match(&self, source: &Path, destination: &Path) -> DeployResult<bool> {
        let source_hash = self.fs.hash(source)?;
        let destination_hash = self.fs.hash(destination)?;
        tracing::trace!(
            source = %source.display(),
            destination = %destination.display(),
            %source_hash,
            %destination_hash,
            "compared artifact digests"
        );
        Ok(source_hash.matches(&destination_hash))
    }

    /// Load the reference digest, `None` if the file is absent
    pub fn load_reference(&self, digest_path: &Path) -> DeployResult<Option<ContentHash>> {
        if !self.fs.exists(digest_path) {
            return Ok(None);
        }
        let text = self.fs.read_to_string(digest_path)?;
        ContentHash::parse_reference(&text)
            .map(Some)
            .ok_or_else(|| DeployError::InvalidReferenceDigest {
                path: digest_path.to_path_buf(),
                content: text.trim().chars().take(80).collect(),
            })
    }

    /// Load the reference digest where a comparison cannot proceed without it
    pub fn require_reference(&self, digest_path: &Path) -> DeployResult<ContentHash> {
        self.load_reference(digest_path)?
            .ok_or_else(|| DeployError::MissingReferenceDigest {
                path: digest_path.to_path_buf(),
            })
    }

    /// True when the file's digest equals the reference
    pub fn matches_reference(&self, path: &Path, reference: &ContentHash) -> DeployResult<bool> {
        let actual = self.fs.hash(path)?;
        tracing::trace!(path = %path.display(), %actual, %reference, "compared against reference digest");
        Ok(actual.matches(reference))
    }

    /// Fail unless the file's digest equals the reference
    pub fn verify_integrity(&self, path: &Path, reference: &ContentHash) -> DeployResult<()> {
        let actual = self.fs.hash(path)?;
        if actual.matches(reference) {
            tracing::debug!(path = %path.display(), "integrity verified");
            Ok(())
        } else {
            Err(DeployError::IntegrityMismatch {
                path: path.to_path_buf(),
                expected: reference.clone(),
                actual,
            })
        }
    }
}
