//! Interactive field collection.
//!
//! A [`PromptSession`] owns whichever backend reads the answers for one run:
//! `requestty` questions when stdin is a terminal, plain line reads otherwise.
//! The backend is closed when the session is dropped.

pub mod lines;
pub mod terminal;

use crate::config::FieldSpec;
use crate::error::PromptFailure;
use lines::LinePrompter;
use std::io::{self, IsTerminal};
use terminal::TerminalPrompter;
use tracing::debug;

/// Source of answers for named text fields.
pub trait Prompter {
    /// Asks for a single field and returns the text entered, unvalidated.
    fn ask(&mut self, field: &FieldSpec) -> Result<String, PromptFailure>;

    /// Releases whatever the prompter holds on to. Called once, on session drop.
    fn close(&mut self) {}
}

/// Prompt backend bound to the process's standard streams for one run.
pub struct PromptSession {
    backend: Box<dyn Prompter>,
}

impl PromptSession {
    pub fn new(backend: Box<dyn Prompter>) -> Self {
        debug!("prompt session opened");
        Self { backend }
    }

    /// Opens a session over stdin.
    ///
    /// Piped input gets its labels on stderr so stdout only carries the result.
    pub fn stdio() -> Self {
        if io::stdin().is_terminal() {
            debug!("stdin is a terminal, using interactive questions");
            Self::new(Box::new(TerminalPrompter))
        } else {
            debug!("stdin is not a terminal, reading one line per field");
            Self::new(Box::new(LinePrompter::new(io::stdin().lock(), io::stderr())))
        }
    }
}

impl Prompter for PromptSession {
    fn ask(&mut self, field: &FieldSpec) -> Result<String, PromptFailure> {
        self.backend.ask(field)
    }
}

impl Drop for PromptSession {
    fn drop(&mut self) {
        self.backend.close();
        debug!("prompt session closed");
    }
}
