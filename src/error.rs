//! Error types for telegraf-deploy
//!
//! Uses `thiserror` for library errors. Every variant terminates the run;
//! `exit_code` maps each one to the process exit status.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;
use crate::domain::value_objects::ContentHash;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Service operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOp {
    Query,
    Install,
    Start,
    Restart,
}

impl std::fmt::Display for ServiceOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ServiceOp::Query => "query",
            ServiceOp::Install => "install",
            ServiceOp::Start => "start",
            ServiceOp::Restart => "restart",
        };
        f.write_str(s)
    }
}

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Filesystem failure while reading, hashing, copying or creating
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Failed to spawn an external program
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The destination binary must be compared but no digest file was shipped
    #[error("reference digest {path} is missing; cannot compare the deployed binary")]
    MissingReferenceDigest { path: PathBuf },

    /// Digest file does not hold a single SHA-256 hex value
    #[error("reference digest {path} is not a SHA-256 hex value: '{content}'")]
    InvalidReferenceDigest { path: PathBuf, content: String },

    /// Source binary does not match the shipped reference digest
    #[error("integrity check failed for {path}: expected {expected}, got {actual}")]
    IntegrityMismatch {
        path: PathBuf,
        expected: ContentHash,
        actual: ContentHash,
    },

    /// Host facts could not be determined
    #[error("role detection failed: {message}")]
    RoleDetection { message: String },

    /// The agent rejected the deployed configuration
    #[error("configuration test failed ({binary} exited with {})", exit_display(.code))]
    ValidationFailed { binary: PathBuf, code: Option<i32> },

    /// A service-control call failed
    #[error("failed to {op} service '{name}': {message}")]
    Service {
        op: ServiceOp,
        name: String,
        message: String,
    },

    /// Service name contains whitespace or is empty
    #[error("invalid service name '{name}': must be a non-empty token without whitespace")]
    InvalidServiceName { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Deployment was declined at the confirmation prompt
    #[error("deployment aborted by user")]
    Aborted,
}

fn exit_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl DeployError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::Fs(_) | DeployError::Spawn { .. } | DeployError::Config { .. } => 1,
            DeployError::InvalidServiceName { .. } => 2,
            DeployError::ValidationFailed { .. } => 3,
            DeployError::Service { .. } => 4,
            DeployError::RoleDetection { .. } => 5,
            DeployError::MissingReferenceDigest { .. }
            | DeployError::InvalidReferenceDigest { .. }
            | DeployError::IntegrityMismatch { .. } => 6,
            DeployError::Aborted => 7,
        }
    }

    pub(crate) fn service(op: ServiceOp, name: &str, message: impl Into<String>) -> Self {
        DeployError::Service {
            op,
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn role_detection(message: impl Into<String>) -> Self {
        DeployError::RoleDetection {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_service() {
        let err = DeployError::service(ServiceOp::Restart, "telegraf", "access denied");
        assert_eq!(
            err.to_string(),
            "failed to restart service 'telegraf': access denied"
        );
    }

    #[test]
    fn test_error_display_validation() {
        let err = DeployError::ValidationFailed {
            binary: PathBuf::from("/opt/telegraf/telegraf"),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "configuration test failed (/opt/telegraf/telegraf exited with status 1)"
        );
    }

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let validation = DeployError::ValidationFailed {
            binary: PathBuf::new(),
            code: None,
        };
        let digest = DeployError::MissingReferenceDigest {
            path: PathBuf::from("telegraf.sha256"),
        };
        assert_eq!(validation.exit_code(), 3);
        assert_eq!(DeployError::role_detection("x").exit_code(), 5);
        assert_eq!(digest.exit_code(), 6);
        assert_eq!(DeployError::Aborted.exit_code(), 7);
    }
}
