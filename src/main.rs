// src/main.rs

use anyhow::Result;
use bytewc::cli::Cli;
use bytewc::errors::Error;
use bytewc::output::write_failure;
use bytewc::{run, ConfigBuilder};
use std::io;

fn main() -> Result<()> {
    // Initialize logging. Release builds stay quiet unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "bytewc=debug".parse()?
                } else {
                    "bytewc=warn".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting bytewc v{}...", env!("CARGO_PKG_VERSION"));
    let raw_args: Vec<_> = std::env::args_os().collect();
    log::debug!("Raw arguments: {:?}", raw_args);

    // --- Configuration & Execution ---
    let cli = Cli::parse_args(raw_args);
    let config = ConfigBuilder::from_cli(cli).build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::FileInaccessible { path, source } => {
                log::debug!("Cannot count '{}': {}", path.display(), source);
                write_failure(&mut out, &path)?;
                std::process::exit(1);
            }
            Error::Output(_) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
