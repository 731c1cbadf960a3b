//! RTSP recorder launcher - container entry point for the recorder add-on.
//!
//! Each launcher instance:
//! - Resolves the output directory from the add-on options
//! - Creates that directory if needed
//! - Spawns the recorder with inherited stdio
//! - Forwards SIGTERM, SIGINT and SIGHUP to the recorder
//! - Exits with the recorder's exit status

mod args;
mod child;
mod config;
mod error;
mod forward;
mod outdir;
mod run;

use args::Args;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; the recorder owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "launcher started");

    let exit_code = match run::run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("launcher error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
