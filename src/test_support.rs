//! Test fakes for cscbuild unit tests.
//!
//! Provides fake implementations of the injected capabilities plus a
//! fixture pinned to working directory `/Working`, so serialization tests
//! can assert exact command lines without touching the filesystem or
//! spawning processes.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::compiler::CscCompiler;
use crate::error::CscError;
use crate::paths;
use crate::runner::{Globber, ProcessRunner, ToolLocator};
use crate::settings::CscSettings;

/// A recorded process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    /// The rendered argument string, as it would appear on the command line.
    pub fn rendered_args(&self) -> String {
        self.args.join(" ")
    }
}

/// Locator that resolves explicit tool paths textually and otherwise
/// returns a configured default.
#[derive(Debug, Clone)]
pub struct FakeToolLocator {
    pub default_path: Option<PathBuf>,
}

impl FakeToolLocator {
    pub fn found_at(path: impl Into<PathBuf>) -> Self {
        FakeToolLocator {
            default_path: Some(path.into()),
        }
    }

    pub fn missing() -> Self {
        FakeToolLocator { default_path: None }
    }
}

impl ToolLocator for FakeToolLocator {
    fn locate(
        &self,
        _names: &[&str],
        tool_path: Option<&Path>,
        working_dir: &Path,
    ) -> Option<PathBuf> {
        match tool_path {
            Some(explicit) => Some(PathBuf::from(paths::make_absolute(working_dir, explicit))),
            None => self.default_path.clone(),
        }
    }
}

/// Runner that records invocations and returns a configured exit code.
#[derive(Debug, Clone)]
pub struct FakeProcessRunner {
    pub exit_code: i32,
    pub fail_start: bool,
    pub invocations: Rc<RefCell<Vec<Invocation>>>,
}

impl Default for FakeProcessRunner {
    fn default() -> Self {
        FakeProcessRunner {
            exit_code: 0,
            fail_start: false,
            invocations: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, program: &Path, args: &[String], working_dir: &Path) -> io::Result<i32> {
        if self.fail_start {
            return Err(io::Error::new(io::ErrorKind::NotFound, "process not started"));
        }

        self.invocations.borrow_mut().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            working_dir: working_dir.to_path_buf(),
        });

        Ok(self.exit_code)
    }
}

/// Globber returning a fixed match set.
#[derive(Debug, Clone, Default)]
pub struct FakeGlobber {
    pub matches: Vec<PathBuf>,
}

impl Globber for FakeGlobber {
    fn matches(&self, _pattern: &str, _working_dir: &Path) -> Vec<PathBuf> {
        self.matches.clone()
    }
}

/// Fixture mirroring a compiler run with working directory `/Working`.
pub struct CompilerFixture {
    pub settings: CscSettings,
    pub source_file: PathBuf,
    pub tool_missing: bool,
    pub exit_code: i32,
    pub fail_start: bool,
    pub glob_matches: Vec<PathBuf>,
}

impl Default for CompilerFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerFixture {
    pub fn new() -> Self {
        let mut settings = CscSettings::default();
        settings.working_directory = Some(PathBuf::from("/Working"));

        CompilerFixture {
            settings,
            source_file: PathBuf::from("./Solution.sln"),
            tool_missing: false,
            exit_code: 0,
            fail_start: false,
            glob_matches: Vec::new(),
        }
    }

    fn compiler(
        &self,
        invocations: Rc<RefCell<Vec<Invocation>>>,
    ) -> CscCompiler<FakeToolLocator, FakeProcessRunner, FakeGlobber> {
        let locator = if self.tool_missing {
            FakeToolLocator::missing()
        } else {
            FakeToolLocator::found_at("/Working/tools/csc.exe")
        };

        let runner = FakeProcessRunner {
            exit_code: self.exit_code,
            fail_start: self.fail_start,
            invocations,
        };

        let globber = FakeGlobber {
            matches: self.glob_matches.clone(),
        };

        CscCompiler::with_capabilities(locator, runner, globber)
    }

    /// Compile the fixture source file and return the recorded invocation.
    pub fn run(&self) -> Result<Invocation, CscError> {
        let invocations = Rc::new(RefCell::new(Vec::new()));
        let compiler = self.compiler(Rc::clone(&invocations));

        compiler.compile_file(&self.source_file, &self.settings)?;

        let invocation = invocations.borrow().last().cloned();
        Ok(invocation.expect("process was not invoked"))
    }

    /// Compile a glob pattern and return the recorded invocation.
    pub fn run_pattern(&self, pattern: &str) -> Result<Invocation, CscError> {
        let invocations = Rc::new(RefCell::new(Vec::new()));
        let compiler = self.compiler(Rc::clone(&invocations));

        compiler.compile_pattern(pattern, &self.settings)?;

        let invocation = invocations.borrow().last().cloned();
        Ok(invocation.expect("process was not invoked"))
    }

    /// Compile a directory and return the recorded invocation.
    pub fn run_directory(&self, directory: &Path) -> Result<Invocation, CscError> {
        let invocations = Rc::new(RefCell::new(Vec::new()));
        let compiler = self.compiler(Rc::clone(&invocations));

        compiler.compile_directory(directory, &self.settings)?;

        let invocation = invocations.borrow().last().cloned();
        Ok(invocation.expect("process was not invoked"))
    }
}
