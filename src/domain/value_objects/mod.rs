//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod execution_mode;
mod hash;
mod service_name;

pub use execution_mode::ExecutionMode;
pub use hash::ContentHash;
pub use service_name::ServiceName;
