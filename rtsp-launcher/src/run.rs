//! Main orchestration: setup, running, shutdown.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rtsp_launcher_proc::ChildSlot;

use crate::args::Args;
use crate::child::Recorder;
use crate::config::{resolve_output_dir, OutputDirSource};
use crate::forward::{forward_signals, SignalListeners};
use crate::outdir::ensure_output_dir;

/// Run the launcher.
///
/// Returns the exit code to use.
pub async fn run(args: Args) -> Result<i32> {
    let slot = Arc::new(ChildSlot::new());

    // Listen first: from here on no signal takes the default action, and
    // signals during setup find an empty slot.
    let listeners = SignalListeners::install()?;
    let forwarder = tokio::spawn(forward_signals(listeners, Arc::clone(&slot)));

    let result = launch(&args, &slot).await;
    forwarder.abort();
    result
}

/// Setup phase followed by supervision.
async fn launch(args: &Args, slot: &ChildSlot) -> Result<i32> {
    // Blocking filesystem work runs off the runtime thread so the forwarder
    // keeps draining signals while setup is in progress.
    let setup = args.clone();
    let output_dir = tokio::task::spawn_blocking(move || prepare_output_dir(&setup))
        .await
        .context("output directory setup task failed")??;

    supervise(&args.recorder_cmd(), &output_dir, slot).await
}

/// Resolve the output directory, log where it came from, and create it.
fn prepare_output_dir(args: &Args) -> Result<PathBuf> {
    let resolved = resolve_output_dir(
        args.output_dir_override(),
        &args.config,
        &args.default_output_dir,
    );

    match &resolved.source {
        OutputDirSource::CommandLine => {
            tracing::info!(path = %resolved.path.display(), "output directory from command line");
        }
        OutputDirSource::Config => {
            tracing::info!(
                path = %resolved.path.display(),
                config = %args.config.display(),
                "output directory from options"
            );
        }
        OutputDirSource::Default { reason } => {
            tracing::info!(
                path = %resolved.path.display(),
                reason = %reason,
                "using default output directory"
            );
        }
    }

    ensure_output_dir(&resolved.path).context("output directory setup failed")?;
    Ok(resolved.path)
}

/// Spawn the recorder, publish it in `slot`, and wait for it to exit.
pub async fn supervise(cmd: &[String], output_dir: &Path, slot: &ChildSlot) -> Result<i32> {
    let mut recorder = Recorder::spawn(cmd, output_dir).context("failed to start recorder")?;
    slot.set(recorder.pid());

    // On the current-thread runtime the forwarder cannot run between the
    // reap inside wait() and clear(), so it never signals a recycled pid.
    let status = recorder.wait().await;
    slot.clear();

    let status = status.context("failed to collect recorder status")?;
    if let Some(sig) = status.signal() {
        tracing::warn!(signal = sig, "recorder killed by signal");
    } else if status.success() {
        tracing::info!("recorder exited cleanly");
    } else if let Some(code) = status.code() {
        tracing::warn!(code, "recorder exited with failure");
    }

    Ok(status.exit_code())
}
