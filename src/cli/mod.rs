pub mod commands;

use crate::error::Result;
use clap::Parser;

/// Application entrypoint.
/// Takes no arguments: running the binary starts the prompt straight away.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "credprompt")]
#[command(about = "Prompt for AWS access keys and echo them as export lines")]
#[command(version)]
pub struct Cli {}

impl Cli {
    /// Runs the prompt and returns the text to print on success.
    pub async fn run(self) -> Result<String> {
        commands::prompt::run().await
    }
}
