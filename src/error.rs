//! Error types for compiler invocation.

use thiserror::Error;

/// Error raised while building arguments or running the compiler.
///
/// Two tiers: contract violations are raised before any process work
/// begins; execution failures carry the tool name and, for exits, the
/// code. Every failure aborts the invocation; there are no retries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CscError {
    /// A required argument was missing or empty.
    #[error("required argument `{0}` was not provided")]
    InvalidArgument(&'static str),

    /// The glob pattern failed the match-count check.
    #[error("argument `{0}` was out of range")]
    PatternOutOfRange(&'static str),

    /// No executable could be located for the tool.
    #[error("{tool}: Could not locate executable.")]
    ToolNotFound { tool: &'static str },

    /// The compiler process could not be started.
    #[error("{tool}: Process was not started.")]
    ProcessNotStarted { tool: &'static str },

    /// The compiler process exited with a non-zero code.
    #[error("{tool}: Process returned an error (exit code {code}).")]
    NonZeroExit { tool: &'static str, code: i32 },
}
