//! CLI argument parsing.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Options document written by the Home Assistant supervisor.
pub const DEFAULT_CONFIG_PATH: &str = "/data/options.json";

/// Output directory used when neither the CLI nor the config supplies one.
pub const DEFAULT_OUTPUT_DIR: &str = "/media/rtsp-recordings";

/// Recorder started when no command is given after `--`.
pub const DEFAULT_RECORDER_CMD: &[&str] = &["python3", "-u", "/record_rtsp.py"];

/// RTSP recorder launcher - prepares the output directory and supervises the recorder.
#[derive(Parser, Debug, Clone)]
#[command(name = "rtsp-launcher", version)]
pub struct Args {
    /// Add-on options JSON file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output directory, overriding the options file (empty means unset)
    #[arg(long, value_name = "PATH")]
    pub output_dir: Option<String>,

    /// Fallback output directory
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    pub default_output_dir: PathBuf,

    /// Recorder command and arguments (after --)
    #[arg(last = true)]
    pub cmd: Vec<String>,
}

impl Args {
    /// Recorder command line, falling back to the bundled recorder script.
    pub fn recorder_cmd(&self) -> Vec<String> {
        if self.cmd.is_empty() {
            DEFAULT_RECORDER_CMD.iter().map(|s| s.to_string()).collect()
        } else {
            self.cmd.clone()
        }
    }

    /// Output directory override, ignoring an empty value.
    pub fn output_dir_override(&self) -> Option<&Path> {
        self.output_dir
            .as_deref()
            .filter(|dir| !dir.is_empty())
            .map(Path::new)
    }
}
