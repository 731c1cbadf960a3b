//! Shared cell holding the supervised child's pid.
//!
//! The cell starts empty, is filled once the child has been spawned, and is
//! cleared after the child has been reaped. Signal forwarding reads it at any
//! point in that lifecycle; an empty cell turns forwarding into a no-op.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::error::ProcError;
use crate::signal::{signal_pid, Signal};
use crate::types::Pid;

/// Sentinel for "no child". Never a valid pid.
const EMPTY: i32 = 0;

/// Outcome of forwarding a signal through a [`ChildSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forwarded {
    /// Signal delivered to the child.
    Delivered(Pid),
    /// No child recorded yet, or it has already been reaped.
    NoChild,
    /// Child recorded but kill() reported it gone.
    Gone(Pid),
}

/// Atomically updated handle to the running child.
#[derive(Debug, Default)]
pub struct ChildSlot {
    pid: AtomicI32,
}

impl ChildSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            pid: AtomicI32::new(EMPTY),
        }
    }

    /// Record the spawned child.
    pub fn set(&self, pid: Pid) {
        self.pid.store(pid.as_raw(), Ordering::Release);
    }

    /// Invalidate the handle, returning the pid that was held.
    pub fn clear(&self) -> Option<Pid> {
        let raw = self.pid.swap(EMPTY, Ordering::AcqRel);
        Pid::new(raw).ok()
    }

    /// Current child, if any.
    pub fn get(&self) -> Option<Pid> {
        Pid::new(self.pid.load(Ordering::Acquire)).ok()
    }

    /// Forward `sig` to the current child.
    ///
    /// A missing child is not an error. Only unexpected kill() failures
    /// (e.g. EPERM) are returned.
    pub fn forward(&self, sig: Signal) -> Result<Forwarded, ProcError> {
        let Some(pid) = self.get() else {
            return Ok(Forwarded::NoChild);
        };

        match signal_pid(pid, sig) {
            Ok(()) => Ok(Forwarded::Delivered(pid)),
            Err(e) if e.is_no_such_process() => Ok(Forwarded::Gone(pid)),
            Err(e) => Err(e),
        }
    }
}
