//! cscbuild - A build-automation front end for the Microsoft C# compiler
//!
//! This crate translates a structured settings record into the command-line
//! argument syntax of `csc.exe` and invokes it as an external process. The
//! argument serialization is deterministic and performs no I/O of its own;
//! tool discovery, glob matching, and process execution are injected
//! capabilities so the mapping stays testable without spawning anything.

pub mod args;
pub mod compiler;
pub mod config;
pub mod error;
pub mod paths;
pub mod runner;
pub mod settings;

/// Test fakes for cscbuild unit tests.
///
/// This module is only available when running tests. It provides fake
/// implementations of the tool locator, process runner, and globber, plus a
/// fixture that mirrors a build with working directory `/Working`.
#[cfg(test)]
pub mod test_support;

pub use compiler::CscCompiler;
pub use error::CscError;
pub use settings::{
    ChecksumAlgorithm, CscSettings, DebugType, ErrorReport, FileAlign, Platform, Resource,
    TargetFormat,
};
