#![allow(dead_code)]

use thiserror::Error;

use crate::inference::InferenceError;

/// Application-level error type.
///
/// Nothing in the extraction or scoring core is fatal to the process: a field
/// that cannot be extracted becomes an empty value, and capability failures
/// degrade at their call site. Only configuration problems (missing lookup
/// tables, bad environment) propagate to the caller as hard failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Capability error: {0}")]
    Capability(#[from] InferenceError),

    #[error("Batch item '{file}' failed: {reason}")]
    BatchItem { file: String, reason: String },
}
