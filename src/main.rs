use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod fsutil;
mod highlight;
mod nanorc;
mod paths;
mod progress;
mod templates;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::GitNanoHighlight(args) => workflow::run_nano_highlight(&args),
        Command::Completion(args) => workflow::run_completion(&args),
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
