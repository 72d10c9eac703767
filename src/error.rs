//! Error types for steprun operations.
//!
//! This module defines [`SteprunError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A step whose command exits non-zero is *not* an error; it is recorded as a
//!   failed [`StepOutcome`](crate::runner::StepOutcome) and the run continues
//! - Use `SteprunError` for conditions that must stop the run outright
//!   (the command could not be started, the step list is malformed)
//! - Use `anyhow::Error` (via `SteprunError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for steprun operations.
#[derive(Debug, Error)]
pub enum SteprunError {
    /// The executable named by a step could not be located.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The child process could not be started or waited on.
    #[error("Failed to run '{command}': {message}")]
    SpawnFailed { command: String, message: String },

    /// A step with no command tokens reached the invoker.
    #[error("Step '{step}' has an empty command")]
    EmptyCommand { step: String },

    /// Steps file does not exist.
    #[error("Steps file not found: {path}")]
    StepsFileNotFound { path: PathBuf },

    /// Steps file could not be parsed.
    #[error("Failed to parse steps file at {path}: {message}")]
    StepsFileParse { path: PathBuf, message: String },

    /// The step list is structurally invalid.
    #[error("Invalid steps: {message}")]
    InvalidSteps { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for steprun operations.
pub type Result<T> = std::result::Result<T, SteprunError>;
