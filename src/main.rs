//! variantgen CLI entrypoint
//! No arguments: every path and the arity range are compile-time constants.
#![deny(unsafe_code)]

// External imports (alphabetized)
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "variantgen")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    // No flags to dispatch on; parsing still rejects stray arguments.
    let _cli = Cli::parse();

    let root = std::env::current_dir()?;
    info!(root = %root.display(), "generating variant sources");

    let written = variantgen::expand_all(&root)?;

    info!(files = written.len(), "done");
    Ok(())
}
