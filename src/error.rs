//! Error types for rendering, writing and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a render before any line is produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The root path does not exist.
    #[error("The path '{}' does not exist.", path.display())]
    PathNotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("The path '{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },
}

/// A failure to persist one output artifact.
#[derive(Debug, Error)]
#[error("could not write '{}': {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while resolving the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `--path` nor any default supplied a root directory.
    #[error("No path provided via command line or defaults.")]
    NoPath,

    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error surfaced by the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
