//! Process error types.

use std::io;

/// Errors that can occur while signalling a process.
#[derive(Debug, thiserror::Error)]
pub enum ProcError {
    /// kill() failed.
    #[error("signal failed")]
    Signal(#[source] io::Error),

    /// Pid is zero or negative, which kill() would treat as a process group.
    #[error("invalid pid: {0}")]
    InvalidPid(i64),
}

impl ProcError {
    /// Returns true if the target process no longer exists (ESRCH).
    pub fn is_no_such_process(&self) -> bool {
        match self {
            ProcError::Signal(e) => e.raw_os_error() == Some(libc::ESRCH),
            ProcError::InvalidPid(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_signal_error_keeps_cause_in_source() {
        let err = ProcError::Signal(io::Error::from_raw_os_error(libc::ESRCH));

        assert_eq!(err.to_string(), "signal failed");
        assert!(err.source().is_some());
        assert!(err.is_no_such_process());
    }
}
