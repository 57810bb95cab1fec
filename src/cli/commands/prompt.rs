// Collects the access key id and secret from the user and renders the
// export lines that `main` prints.

use crate::config::Layout;
use crate::credentials::CredentialInput;
use crate::error::Result;
use crate::prompt::{PromptSession, Prompter};
use tracing::{debug, info};

/// Runs the prompt flow against any prompter and returns the rendered output.
///
/// Nothing is rendered unless both fields were collected.
pub fn run_with<P: Prompter + ?Sized>(prompter: &mut P, layout: &Layout) -> Result<String> {
    let input = CredentialInput::collect(prompter, layout).inspect_err(|err| {
        debug!(error = %err, "prompt failed");
    })?;

    info!("both fields collected");
    Ok(input.render(layout))
}

/// The main entry point: prompts over stdin for this run only.
///
/// The session is dropped, and its backend closed, before this returns on
/// every path.
#[allow(clippy::unused_async)]
pub async fn run() -> Result<String> {
    let layout = Layout::load()?;
    let mut session = PromptSession::stdio();

    run_with(&mut session, &layout)
}
