//! Process primitives for the RTSP recorder launcher.
//!
//! This crate wraps the handful of syscalls the launcher needs to supervise
//! one child: typed pids, signal delivery, exit-status decoding, and the
//! [`ChildSlot`] shared between the waiting task and the signal forwarder.
//!
//! # Example
//!
//! ```no_run
//! use rtsp_launcher_proc::{ChildSlot, Forwarded, Pid, Signal};
//!
//! let slot = ChildSlot::new();
//!
//! // Nothing spawned yet: forwarding is a no-op.
//! assert_eq!(slot.forward(Signal::Term).unwrap(), Forwarded::NoChild);
//!
//! let child = std::process::Command::new("sleep").arg("30").spawn().unwrap();
//! slot.set(Pid::try_from(child.id()).unwrap());
//! slot.forward(Signal::Term).unwrap();
//! ```

mod error;
mod signal;
mod slot;
mod types;
mod wait;

pub use error::ProcError;
pub use signal::{signal_pid, Signal};
pub use slot::{ChildSlot, Forwarded};
pub use types::Pid;
pub use wait::ExitStatus;
