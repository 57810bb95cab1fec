use clap::Parser;
use credprompt::cli::Cli;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr so stdout only carries the export lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(result) => println!("{result}"),
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}
