use crate::config::Layout;
use crate::error::PromptFailure;
use crate::prompt::Prompter;
use tracing::debug;

/// The two values entered by the user for one run. Never validated, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialInput {
    pub access_key_id: String,
    pub access_secret_key: String,
}

impl CredentialInput {
    /// Asks for the key id, then the secret. Stops at the first failure.
    pub fn collect<P: Prompter + ?Sized>(
        prompter: &mut P,
        layout: &Layout,
    ) -> Result<Self, PromptFailure> {
        let access_key_id = prompter.ask(&layout.access_key_id)?;
        debug!(field = %layout.access_key_id.name, "field collected");

        let access_secret_key = prompter.ask(&layout.access_secret_key)?;
        debug!(field = %layout.access_secret_key.name, "field collected");

        Ok(Self {
            access_key_id,
            access_secret_key,
        })
    }

    /// Header line followed by one indented export line per field, no trailing newline.
    pub fn render(&self, layout: &Layout) -> String {
        format!(
            "{}\n  export {}: {}\n  export {}: {}",
            layout.header,
            layout.access_key_id.export,
            self.access_key_id,
            layout.access_secret_key.export,
            self.access_secret_key
        )
    }
}
