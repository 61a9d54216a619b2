//! Palaver - conversation panel demo
//!
//! Hosts the conversation store in a terminal composer.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use palaver::config::Profile;
use palaver::runner::{self, HostConfig};

/// Palaver - reply-threaded conversation composer
#[derive(Parser, Debug)]
#[command(name = "palaver")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// JSON profile file with the local author identity
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Pre-stage a file before the composer starts (repeatable)
    #[arg(short, long)]
    attach: Vec<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose logging (equivalent to RUST_LOG=trace)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "trace"
    } else if args.debug {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let profile = match &args.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    runner::run(HostConfig {
        profile,
        attach: args.attach,
    })
}
