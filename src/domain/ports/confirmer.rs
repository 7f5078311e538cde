//! Confirmer port
//!
//! The single up-front confirmation asked for by `--confirm`.

use crate::error::DeployResult;

pub trait Confirmer {
    /// Ask the operator; `Ok(false)` means declined
    fn confirm(&self, prompt: &str) -> DeployResult<bool>;
}
