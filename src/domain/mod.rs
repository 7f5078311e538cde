//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Managed artifacts, host facts, the run result
//! - `value_objects/` - Immutable value types (ContentHash, ExecutionMode, ServiceName)
//! - `services/` - Artifact catalog
//! - `policies/` - Role policy table
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or processes directly
//! 2. **Pure Functions** - Policies are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
