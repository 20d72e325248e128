//! Unified error types for the Packcheck workspace.
//!
//! Every fallible operation in the workspace returns these variants; the CLI
//! decides how each one is rendered and which exit code it maps to.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PackcheckError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A required external tool is not installed or not on PATH.
    #[error("'{tool}' command not found. {hint}")]
    ToolNotFound {
        /// Name of the missing binary.
        tool: &'static str,
        /// Installation hint shown to the user.
        hint: &'static str,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("{tool} exited with status {code}")]
    CommandFailed {
        /// Name of the binary that failed.
        tool: &'static str,
        /// Exit code, or -1 if the process was terminated by a signal.
        code: i32,
        /// Captured standard output of the failed command.
        stdout: String,
        /// Captured standard error of the failed command.
        stderr: String,
    },

    /// A configuration value or input is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PackcheckError>;
