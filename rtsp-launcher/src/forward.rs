//! Signal forwarding from the launcher to the recorder.
//!
//! Listeners replace the default disposition, so a SIGTERM from the
//! supervisor never kills the launcher directly. The launcher only exits
//! once the recorder has exited.

use std::sync::Arc;

use rtsp_launcher_proc::{ChildSlot, Forwarded, Signal};
use tokio::signal::unix::{signal, Signal as SignalStream, SignalKind};

use crate::error::LaunchError;

/// Registered listeners for every forwarded signal.
pub struct SignalListeners {
    term: SignalStream,
    int: SignalStream,
    hup: SignalStream,
}

impl SignalListeners {
    /// Register SIGTERM, SIGINT and SIGHUP listeners.
    pub fn install() -> Result<Self, LaunchError> {
        Ok(Self {
            term: listen(SignalKind::terminate(), "SIGTERM")?,
            int: listen(SignalKind::interrupt(), "SIGINT")?,
            hup: listen(SignalKind::hangup(), "SIGHUP")?,
        })
    }

    /// Wait for the next signal. `None` once the signal driver shuts down.
    pub async fn recv(&mut self) -> Option<Signal> {
        tokio::select! {
            r = self.term.recv() => r.map(|()| Signal::Term),
            r = self.int.recv() => r.map(|()| Signal::Int),
            r = self.hup.recv() => r.map(|()| Signal::Hup),
        }
    }
}

fn listen(kind: SignalKind, name: &'static str) -> Result<SignalStream, LaunchError> {
    signal(kind).map_err(|source| LaunchError::SignalSetup {
        signal: name,
        source,
    })
}

/// Forward every received signal to whatever child the slot holds.
pub async fn forward_signals(mut listeners: SignalListeners, slot: Arc<ChildSlot>) {
    while let Some(sig) = listeners.recv().await {
        forward_one(&slot, sig);
    }
}

/// Forward a single signal. Never fails: the recorder owns its own shutdown.
pub fn forward_one(slot: &ChildSlot, sig: Signal) {
    match slot.forward(sig) {
        Ok(Forwarded::Delivered(pid)) => {
            tracing::info!(signal = %sig, pid = pid.as_raw(), "forwarded signal to recorder");
        }
        Ok(Forwarded::NoChild) => {
            tracing::debug!(signal = %sig, "no recorder running, signal ignored");
        }
        Ok(Forwarded::Gone(pid)) => {
            tracing::debug!(signal = %sig, pid = pid.as_raw(), "recorder already exited");
        }
        Err(e) => {
            tracing::warn!(signal = %sig, "failed to forward signal: {:#}", anyhow::Error::from(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtsp_launcher_proc::{ExitStatus, Pid};

    #[test]
    fn test_forward_without_child_is_noop() {
        let slot = ChildSlot::new();
        forward_one(&slot, Signal::Term);
        forward_one(&slot, Signal::Int);
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_forward_to_exited_child_is_noop() {
        let slot = ChildSlot::new();
        slot.set(Pid::new(99_999_999).unwrap());
        forward_one(&slot, Signal::Term);
    }

    #[test]
    fn test_forward_reaches_child() {
        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("spawn sleep");
        let slot = ChildSlot::new();
        slot.set(Pid::try_from(child.id()).unwrap());

        forward_one(&slot, Signal::Term);

        let status = ExitStatus::from(child.wait().unwrap());
        assert_eq!(status, ExitStatus::Signaled(Signal::Term.to_libc()));
    }

    #[tokio::test]
    async fn test_install_listeners() {
        assert!(SignalListeners::install().is_ok());
    }
}
