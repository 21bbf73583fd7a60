use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

use movieseek::cli::Cli;
use movieseek::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_target()) {
        eprintln!("{} {e}", "warning:".yellow());
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {e}", "error:".red());
            ExitCode::FAILURE
        }
    }
}
