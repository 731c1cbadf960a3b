//! Recorder child process.

use std::path::Path;
use std::process::Stdio;

use rtsp_launcher_proc::{ExitStatus, Pid};
use tokio::process::{Child, Command};

use crate::error::LaunchError;

/// Environment variable carrying the resolved output directory to the recorder.
pub const OUTPUT_DIR_ENV: &str = "RTSP_OUTPUT_DIR";

/// Wrapper around the spawned recorder.
pub struct Recorder {
    inner: Child,
    pid: Pid,
}

impl Recorder {
    /// Spawn the recorder with inherited stdio so the supervisor captures its logs.
    pub fn spawn(cmd: &[String], output_dir: &Path) -> Result<Self, LaunchError> {
        let (program, rest) = cmd.split_first().ok_or(LaunchError::EmptyCommand)?;

        let inner = Command::new(program)
            .args(rest)
            .env(OUTPUT_DIR_ENV, output_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.clone(),
                source,
            })?;

        let pid = inner
            .id()
            .and_then(|raw| Pid::try_from(raw).ok())
            .ok_or(LaunchError::MissingPid)?;

        tracing::info!(pid = pid.as_raw(), program = %program, "recorder spawned");

        Ok(Self { inner, pid })
    }

    /// Get the recorder's PID.
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Wait for the recorder to exit and collect its status.
    pub async fn wait(&mut self) -> Result<ExitStatus, LaunchError> {
        self.inner
            .wait()
            .await
            .map(ExitStatus::from)
            .map_err(LaunchError::Wait)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_exit_code_is_collected() {
        let mut recorder =
            Recorder::spawn(&cmd(&["sh", "-c", "exit 7"]), Path::new("/tmp")).unwrap();
        assert!(recorder.pid().as_raw() > 0);

        assert_eq!(recorder.wait().await.unwrap(), ExitStatus::Code(7));
    }

    #[tokio::test]
    async fn test_output_dir_is_exported() {
        let mut recorder = Recorder::spawn(
            &cmd(&["sh", "-c", r#"test "$RTSP_OUTPUT_DIR" = /media/custom"#]),
            Path::new("/media/custom"),
        )
        .unwrap();

        assert!(recorder.wait().await.unwrap().success());
    }

    #[tokio::test]
    async fn test_empty_command_fails() {
        let err = Recorder::spawn(&[], Path::new("/tmp")).err().unwrap();
        assert!(matches!(err, LaunchError::EmptyCommand));
    }

    #[tokio::test]
    async fn test_missing_program_fails() {
        let err = Recorder::spawn(
            &cmd(&["/nonexistent/rtsp-recorder-binary"]),
            Path::new("/tmp"),
        )
        .err()
        .unwrap();
        assert!(matches!(err, LaunchError::Spawn { .. }), "got {:?}", err);
    }
}
