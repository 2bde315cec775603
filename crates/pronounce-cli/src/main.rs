//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;

use pronounce_cli::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli, |name| std::env::var(name).ok()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
