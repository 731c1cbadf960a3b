//! Launcher error types.

use std::io;
use std::path::PathBuf;

/// Setup and supervision failures. All of them are fatal.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// create_dir_all() failed.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Something other than a directory occupies the output path.
    #[error("output path {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Recorder command line was empty.
    #[error("no recorder command specified")]
    EmptyCommand,

    /// Recorder could not be started.
    #[error("failed to spawn recorder {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Spawned recorder reported no usable pid.
    #[error("spawned recorder has no pid")]
    MissingPid,

    /// Waiting on the recorder failed.
    #[error("failed to wait for recorder")]
    Wait(#[source] io::Error),

    /// A signal listener could not be registered.
    #[error("failed to install {signal} handler")]
    SignalSetup {
        signal: &'static str,
        #[source]
        source: io::Error,
    },
}
