//! Terminal confirmation prompt

use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::Confirmer;
use crate::error::DeployResult;

/// Asks on the controlling terminal. Without one the answer is no.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> DeployResult<bool> {
        if !std::io::stdin().is_terminal() {
            tracing::warn!("--confirm needs an interactive terminal; treating as declined");
            return Ok(false);
        }
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed; treating as declined");
                Ok(false)
            }
        }
    }
}
