//! Signal delivery to child processes.

use std::io;

use crate::error::ProcError;
use crate::types::Pid;

/// Signals the launcher consumes and forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Interrupt (Ctrl+C).
    Int,
    /// Terminate.
    Term,
    /// Hangup.
    Hup,
}

impl Signal {
    /// Convert to libc signal number.
    pub fn to_libc(self) -> libc::c_int {
        match self {
            Signal::Int => libc::SIGINT,
            Signal::Term => libc::SIGTERM,
            Signal::Hup => libc::SIGHUP,
        }
    }

    /// Conventional name, for log output.
    pub fn name(self) -> &'static str {
        match self {
            Signal::Int => "SIGINT",
            Signal::Term => "SIGTERM",
            Signal::Hup => "SIGHUP",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Send a signal to a specific process.
pub fn signal_pid(pid: Pid, sig: Signal) -> Result<(), ProcError> {
    // Pid is positive by construction, so this never reaches a process group.
    let ret = unsafe { libc::kill(pid.as_raw(), sig.to_libc()) };
    if ret != 0 {
        return Err(ProcError::Signal(io::Error::last_os_error()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_libc_numbers() {
        assert_eq!(Signal::Int.to_libc(), libc::SIGINT);
        assert_eq!(Signal::Term.to_libc(), libc::SIGTERM);
        assert_eq!(Signal::Hup.to_libc(), libc::SIGHUP);
    }

    #[test]
    fn test_display() {
        assert_eq!(Signal::Term.to_string(), "SIGTERM");
        assert_eq!(Signal::Hup.to_string(), "SIGHUP");
    }

    #[test]
    fn test_signal_missing_process_is_esrch() {
        // Well above the kernel's pid_max ceiling.
        let pid = Pid::new(99_999_999).unwrap();
        let err = signal_pid(pid, Signal::Term).unwrap_err();
        assert!(err.is_no_such_process(), "unexpected error: {}", err);
    }

    #[test]
    fn test_signal_running_child() {
        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("spawn sleep");
        let pid = Pid::try_from(child.id()).unwrap();

        signal_pid(pid, Signal::Term).unwrap();

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(libc::SIGTERM));
    }
}
