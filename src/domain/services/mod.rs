//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod catalog;

pub use catalog::{
    ArtifactFiles, ArtifactLayout, BASE_CONFIG_NAME, BINARY_NAME, DEFAULT_CONFIG_DIR,
    SYSTEM_CONFIG_NAME,
};
