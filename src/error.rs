//! Custom error types for the language guesser.
//!
//! Detection itself never fails — every ambiguous, too-short, or
//! unrecognised-script input degrades to the `"No match"` sentinel. The only
//! true errors are environmental: configuration problems and a model
//! repository that cannot be loaded at startup.

use thiserror::Error;

/// Unified error type for startup-time failures.
#[derive(Debug, Error)]
pub enum GuessLangError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
