//! Add-on options loading.
//!
//! The supervisor writes the add-on options to a JSON object. The launcher
//! only cares about `output_dir`; every other key belongs to the recorder.
//! Any problem reading that value falls back to the default directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The subset of add-on options the launcher reads.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AddonOptions {
    #[serde(default)]
    pub output_dir: Option<String>,
}

/// Reasons the options file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("options file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("options in {} are not a JSON object", .0.display())]
    NotAnObject(PathBuf),
}

/// Where the resolved output directory came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDirSource {
    /// `--output-dir` flag.
    CommandLine,
    /// `output_dir` in the options file.
    Config,
    /// Fallback, with the reason the options file did not supply a value.
    Default { reason: String },
}

/// Output directory plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputDir {
    pub path: PathBuf,
    pub source: OutputDirSource,
}

/// Load the options file.
pub fn load_options(path: &Path) -> Result<AddonOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let parse_err = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    // Structs also deserialize from arrays, so check the shape first.
    let value: serde_json::Value = serde_json::from_str(&text).map_err(parse_err)?;
    if !value.is_object() {
        return Err(ConfigError::NotAnObject(path.to_path_buf()));
    }

    serde_json::from_value(value).map_err(parse_err)
}

/// Resolve the output directory: CLI override, then options file, then default.
pub fn resolve_output_dir(
    cli_override: Option<&Path>,
    config_path: &Path,
    default_dir: &Path,
) -> ResolvedOutputDir {
    if let Some(path) = cli_override {
        return ResolvedOutputDir {
            path: path.to_path_buf(),
            source: OutputDirSource::CommandLine,
        };
    }

    let reason = match load_options(config_path) {
        Ok(AddonOptions {
            output_dir: Some(dir),
        }) if !dir.is_empty() => {
            return ResolvedOutputDir {
                path: PathBuf::from(dir),
                source: OutputDirSource::Config,
            };
        }
        Ok(AddonOptions { output_dir: Some(_) }) => "output_dir is empty".to_string(),
        Ok(AddonOptions { output_dir: None }) => "output_dir is not set".to_string(),
        Err(e) => e.to_string(),
    };

    ResolvedOutputDir {
        path: default_dir.to_path_buf(),
        source: OutputDirSource::Default { reason },
    }
}
