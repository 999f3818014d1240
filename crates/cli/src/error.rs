//! CLI failure categories, one exit code each.
//!
//! Scripts driving the binary can branch on the code alone: 10 means the
//! animator rejected the request (unknown preset, bad surface), 11 a write
//! to disk failed, 12 the user supplied bad input, 13 JSON output could not
//! be produced. clap's own usage errors exit with 2 before any of this runs,
//! and 0 is success.

use flowcanvas_core::AnimatorError;
use std::fmt;

/// A render or list failure, bucketed for `main`'s exit code.
pub enum CliError {
    /// The animator rejected the preset, surface, or a frame advance.
    Animator(AnimatorError),
    /// The snapshot could not be written.
    Io(String),
    /// Malformed `--params` JSON or an incomplete pointer pair.
    Input(String),
    /// `--json` output could not be serialized.
    Serialization(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Animator(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Animator(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<AnimatorError> for CliError {
    fn from(e: AnimatorError) -> Self {
        match e {
            AnimatorError::Io(msg) => CliError::Io(msg),
            other => CliError::Animator(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
