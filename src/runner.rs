//! Injected capabilities: tool discovery, process execution, glob matching.
//!
//! The compiler core only formats a command line; everything that touches
//! the outside world sits behind these traits so the argument mapping stays
//! testable without spawning real processes. The `System*` implementations
//! are what the binary wires in.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::paths;

/// Locates the compiler executable.
pub trait ToolLocator {
    /// Resolve the executable, preferring an explicit tool path.
    ///
    /// A relative explicit path resolves against the working directory and
    /// must exist; otherwise the candidate names are searched on PATH.
    fn locate(&self, names: &[&str], tool_path: Option<&Path>, working_dir: &Path)
        -> Option<PathBuf>;
}

/// Runs the compiler process to completion.
pub trait ProcessRunner {
    /// Start `program` with the given argument tokens and wait for exit.
    ///
    /// Returns the exit code. An `Err` means the process never started.
    fn run(&self, program: &Path, args: &[String], working_dir: &Path) -> io::Result<i32>;
}

/// Matches glob patterns against the filesystem.
pub trait Globber {
    /// Files matching `pattern`, resolved relative to the working directory.
    fn matches(&self, pattern: &str, working_dir: &Path) -> Vec<PathBuf>;
}

/// Display a command for log messages.
pub fn display_command(program: &Path, args: &[String]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().cloned());
    parts.join(" ")
}

/// Tool locator backed by the real filesystem and PATH.
#[derive(Debug, Clone, Default)]
pub struct SystemToolLocator;

impl ToolLocator for SystemToolLocator {
    fn locate(
        &self,
        names: &[&str],
        tool_path: Option<&Path>,
        working_dir: &Path,
    ) -> Option<PathBuf> {
        if let Some(explicit) = tool_path {
            let resolved = PathBuf::from(paths::make_absolute(working_dir, explicit));
            if resolved.is_file() {
                return Some(resolved);
            }
            tracing::warn!("configured tool path not found: {}", resolved.display());
            return None;
        }

        names.iter().find_map(|name| which::which(name).ok())
    }
}

/// Process runner backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &Path, args: &[String], working_dir: &Path) -> io::Result<i32> {
        tracing::debug!("running `{}`", display_command(program, args));

        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .status()?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Globber backed by the `glob` crate.
#[derive(Debug, Clone, Default)]
pub struct SystemGlobber;

impl Globber for SystemGlobber {
    fn matches(&self, pattern: &str, working_dir: &Path) -> Vec<PathBuf> {
        let full_pattern = working_dir.join(pattern);
        let pattern_str = full_pattern.to_string_lossy();

        let entries = match glob::glob(&pattern_str) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("invalid glob pattern `{}`: {}", pattern, e);
                return Vec::new();
            }
        };

        let mut results = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) => results.push(path),
                Err(e) => tracing::warn!("glob error: {}", e),
            }
        }
        results.sort();
        results
    }
}
