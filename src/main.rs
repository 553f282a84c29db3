use std::{env, io};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use gambit_cli::Session;

/// Build the log filter from `RUST_LOG`-style directives, defaulting to `info`.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(io::stderr)
        .init();
    info!("gambit starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new().run(stdin.lock(), &mut stdout)?;
    Ok(())
}
