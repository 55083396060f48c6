//! Yes/no confirmation seam.
//!
//! Every destructive action (directory deletion, branch deletion) and every
//! clone goes through [`Prompt::confirm`]. In non-interactive mode the
//! configured default applies uniformly and silently.

use dialoguer::Confirm;

use crate::error::SyncError;

/// Asks the operator yes/no questions.
pub trait Prompt {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, SyncError>;
}

/// Terminal-backed prompt. With `interactive == false` it never asks and
/// returns the default unchanged.
pub struct ConsolePrompt {
    interactive: bool,
}

impl ConsolePrompt {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Prompt for ConsolePrompt {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, SyncError> {
        if !self.interactive {
            return Ok(default);
        }
        Ok(Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_returns_the_default() {
        let mut prompt = ConsolePrompt::new(false);
        assert!(prompt.confirm("Clone locally?", true).unwrap());
        assert!(!prompt.confirm("Delete locally?", false).unwrap());
    }
}
