//! Command-line entry point for targzsize.
//!
//! Prints the combined unpacked size of every archive given on the command
//! line to stderr, as a plain byte count or in human units.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use targzsize::{Cli, NOTICES, process_all, total_to_string};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.legal {
        print!("{NOTICES}");
        return Ok(());
    }

    init_logging();
    cli.validate()?;

    let total = process_all(&cli.paths, &cli.options()).await?;

    eprintln!("{}", total_to_string(&total, cli.human));

    Ok(())
}

/// Log to stderr, honouring `RUST_LOG` and defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
