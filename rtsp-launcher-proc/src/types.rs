//! Core process types.

use crate::error::ProcError;

/// Process ID of a spawned child. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pid(i32);

impl Pid {
    /// Create a new Pid, rejecting values kill() would interpret as a group.
    pub fn new(pid: i32) -> Result<Self, ProcError> {
        if pid <= 0 {
            return Err(ProcError::InvalidPid(pid.into()));
        }
        Ok(Self(pid))
    }

    /// Get the raw pid value.
    pub fn as_raw(&self) -> i32 {
        self.0
    }
}

impl TryFrom<u32> for Pid {
    type Error = ProcError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        let pid = i32::try_from(raw).map_err(|_| ProcError::InvalidPid(raw.into()))?;
        Pid::new(pid)
    }
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_rejects_non_positive() {
        assert!(matches!(Pid::new(0), Err(ProcError::InvalidPid(0))));
        assert!(matches!(Pid::new(-1), Err(ProcError::InvalidPid(-1))));
        assert_eq!(Pid::new(42).unwrap().as_raw(), 42);
    }

    #[test]
    fn test_pid_from_u32() {
        assert_eq!(Pid::try_from(1234u32).unwrap().as_raw(), 1234);
        assert!(Pid::try_from(0u32).is_err());
        assert!(Pid::try_from(u32::MAX).is_err());
    }
}
