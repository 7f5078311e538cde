//! Domain Policies
//!
//! Business rules that decide what gets deployed.

pub mod role_policy;

pub use role_policy::{
    condition_holds, is_applicable, select_in_scope, selected_optional, OptionalConfig, ROLE_TABLE,
};
