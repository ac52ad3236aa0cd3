use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Every failure the dispatcher can surface to its entry point.
#[derive(Debug, Error)]
pub enum MoldError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write default config to {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    #[error("invalid value for {var}: '{value}'")]
    ConfigEnv { var: String, value: String },

    #[error("command '{name}' not found")]
    CommandNotFound { name: String },

    #[error("failed to resolve executable {path}")]
    ExecutableResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to launch {path}")]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to wait for {path}")]
    Wait {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} exited with {}", exit_label(.code))]
    ChildExit { path: PathBuf, code: Option<i32> },

    #[error("{path} timed out after {}", seconds(.timeout))]
    ChildTimeout { path: PathBuf, timeout: Duration },

    #[error("failed to create directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("command '{name}' failed: {cause:#}")]
    Handler { name: String, cause: anyhow::Error },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {}", c),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn seconds(timeout: &Duration) -> String {
    format!("{}s", timeout.as_secs_f64())
}

impl MoldError {
    /// True when neither a handler nor a binary answers to the name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MoldError::CommandNotFound { .. })
    }
}
