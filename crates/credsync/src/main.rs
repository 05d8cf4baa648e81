//! credsync - Entry Point
//!
//! Operator binary: prints the effective configuration and inspects cached
//! credentials in the configured shared store.

use clap::Parser;
use credsync::cli::{Cli, run};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("credsync: {e}");
            ExitCode::from(2)
        }
    }
}
