//! Compiler settings and the static switch table.
//!
//! `CscSettings` is a flat record of optional fields, each mapping 1:1 to a
//! `csc.exe` command-line switch. A field left at its default produces no
//! switch at all; "not provided" is always distinguishable from "explicitly
//! false" where the compiler cares about the difference.

use std::path::PathBuf;

use serde::Deserialize;

/// Literal switch strings, one constant per compiler flag.
///
/// Switch names are never derived from field identifiers at run time; this
/// table is the single source of truth for the emitted spelling.
pub mod switch {
    pub const ADD_MODULE: &str = "/addmodule";
    pub const APP_CONFIG: &str = "/appconfig";
    pub const BASE_ADDRESS: &str = "/baseaddress";
    pub const BUG_REPORT: &str = "/bugreport";
    pub const CHECKED: &str = "/checked";
    pub const CHECKSUM_ALGORITHM: &str = "/checksumalgorithm";
    pub const CODE_PAGE: &str = "/codepage";
    pub const DEBUG: &str = "/debug";
    pub const DEFINE: &str = "/define";
    pub const DELAY_SIGN: &str = "/delaysign";
    pub const DOC: &str = "/doc";
    pub const ERROR_REPORT: &str = "/errorreport";
    pub const FILE_ALIGN: &str = "/filealign";
    pub const FULL_PATHS: &str = "/fullpaths";
    pub const HELP: &str = "/help";
    pub const HIGH_ENTROPY_VA: &str = "/highentropyva";
    pub const KEY_CONTAINER: &str = "/keycontainer";
    pub const KEY_FILE: &str = "/keyfile";
    pub const LANGUAGE_VERSION: &str = "/languageversion";
    pub const LIB: &str = "/lib";
    pub const LINK: &str = "/link";
    pub const LINK_RESOURCE: &str = "/linkresource";
    pub const MAIN: &str = "/main";
    pub const MODULE_ASSEMBLY_NAME: &str = "/moduleassemblyname";
    pub const MODULE_NAME: &str = "/modulename";
    pub const NO_CONFIG: &str = "/noconfig";
    pub const NO_LOGO: &str = "/nologo";
    pub const NO_STDLIB: &str = "/nostdlib";
    pub const NO_WARN: &str = "/nowarn";
    pub const NO_WIN32_MANIFEST: &str = "/nowin32manifest";
    pub const OPTIMIZE: &str = "/optimize";
    pub const OUT: &str = "/out";
    pub const PDB: &str = "/pdb";
    pub const PLATFORM: &str = "/platform";
    // TODO: csc itself documents this flag as /preferreduilang; confirm
    // against a real compiler before changing the emitted spelling.
    pub const PREFERRED_UI_LANGUAGE: &str = "/preffereduilanguage";
    pub const RECURSE: &str = "/recurse";
    pub const RESOURCE: &str = "/resource";
    /// Identifier tag appended after `/resource` and `/linkresource`.
    pub const RESOURCE_TAG: &str = "/t";
    pub const SUBSYSTEM_VERSION: &str = "/subsystemversion";
    pub const TARGET: &str = "/target";
    pub const UNSAFE: &str = "/unsafe";
    pub const UTF8_OUTPUT: &str = "/utf8output";
    pub const WARN: &str = "/warn";
    pub const WARN_AS_ERROR: &str = "/warnaserror";
    pub const WIN32_ICON: &str = "/win32icon";
    pub const WIN32_MANIFEST: &str = "/win32manifest";
    pub const WIN32_RES: &str = "/win32res";

    /// Every switch this crate can emit, for table-level checks.
    pub const ALL: &[&str] = &[
        ADD_MODULE,
        APP_CONFIG,
        BASE_ADDRESS,
        BUG_REPORT,
        CHECKED,
        CHECKSUM_ALGORITHM,
        CODE_PAGE,
        DEBUG,
        DEFINE,
        DELAY_SIGN,
        DOC,
        ERROR_REPORT,
        FILE_ALIGN,
        FULL_PATHS,
        HELP,
        HIGH_ENTROPY_VA,
        KEY_CONTAINER,
        KEY_FILE,
        LANGUAGE_VERSION,
        LIB,
        LINK,
        LINK_RESOURCE,
        MAIN,
        MODULE_ASSEMBLY_NAME,
        MODULE_NAME,
        NO_CONFIG,
        NO_LOGO,
        NO_STDLIB,
        NO_WARN,
        NO_WIN32_MANIFEST,
        OPTIMIZE,
        OUT,
        PDB,
        PLATFORM,
        PREFERRED_UI_LANGUAGE,
        RECURSE,
        RESOURCE,
        RESOURCE_TAG,
        SUBSYSTEM_VERSION,
        TARGET,
        UNSAFE,
        UTF8_OUTPUT,
        WARN,
        WARN_AS_ERROR,
        WIN32_ICON,
        WIN32_MANIFEST,
        WIN32_RES,
    ];
}

/// Algorithm for the source-file checksum stored in the PDB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    Sha1,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Switch value as emitted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha1 => "sha1",
            ChecksumAlgorithm::Sha256 => "sha256",
        }
    }
}

/// Kind of debugging information to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugType {
    Full,
    #[serde(rename = "pdbonly")]
    PdbOnly,
}

impl DebugType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebugType::Full => "full",
            DebugType::PdbOnly => "pdbonly",
        }
    }
}

/// How internal compiler errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorReport {
    None,
    Prompt,
    Queue,
    Send,
}

impl ErrorReport {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReport::None => "none",
            ErrorReport::Prompt => "prompt",
            ErrorReport::Queue => "queue",
            ErrorReport::Send => "send",
        }
    }
}

/// Section size in the output file, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FileAlign {
    #[serde(rename = "512")]
    X512,
    #[serde(rename = "1024")]
    X1024,
    #[serde(rename = "2048")]
    X2048,
    #[serde(rename = "4096")]
    X4096,
    #[serde(rename = "8192")]
    X8192,
}

impl FileAlign {
    /// Switch value: the numeric byte count.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAlign::X512 => "512",
            FileAlign::X1024 => "1024",
            FileAlign::X2048 => "2048",
            FileAlign::X4096 => "4096",
            FileAlign::X8192 => "8192",
        }
    }
}

/// Which common language runtime can run the assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    AnyCpu,
    #[serde(rename = "anycpu32bitpreferred")]
    AnyCpu32BitPreferred,
    Arm,
    X64,
    X86,
    Itanium,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::AnyCpu => "anycpu",
            Platform::AnyCpu32BitPreferred => "anycpu32bitpreferred",
            Platform::Arm => "arm",
            Platform::X64 => "x64",
            Platform::X86 => "x86",
            Platform::Itanium => "itanium",
        }
    }
}

/// Format of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[serde(rename = "appcontainerexe")]
    AppContainerExe,
    Exe,
    Library,
    Module,
    WinExe,
    #[serde(rename = "winmdobj")]
    WinMdObj,
}

impl TargetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::AppContainerExe => "appcontainerexe",
            TargetFormat::Exe => "exe",
            TargetFormat::Library => "library",
            TargetFormat::Module => "module",
            TargetFormat::WinExe => "winexe",
            TargetFormat::WinMdObj => "winmdobj",
        }
    }
}

/// A .NET resource to embed or link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Resource {
    /// The resource file.
    pub file: PathBuf,
    /// Logical name used to load the resource; defaults to the file name.
    pub identifier: Option<String>,
    /// Accessibility of the resource: `public` or `private`.
    pub accessibility_modifier: Option<String>,
}

/// Settings consumed by [`CscCompiler`](crate::compiler::CscCompiler).
///
/// Constructed fresh per invocation, populated via field assignment or
/// [`CscSettings::configure`], consumed once, discarded after the process
/// call returns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CscSettings {
    /// Modules to add to this assembly (`/addmodule`).
    pub modules: Vec<PathBuf>,
    /// Location of app.config at assembly binding time.
    pub app_config: Option<PathBuf>,
    /// Base address for the DLL, decimal, hexadecimal, or octal.
    pub base_address: Option<String>,
    /// File receiving debug information for later analysis.
    pub bug_report: Option<PathBuf>,
    /// Whether overflowing integer arithmetic outside `checked`/`unchecked`
    /// raises a run-time exception. Tri-state: only `Some(true)` emits.
    pub checked: Option<bool>,
    /// Algorithm for the source checksum stored in the PDB.
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
    /// Codepage to use during compilation.
    pub code_page: Option<String>,
    /// Emit debugging information.
    pub debug: bool,
    /// Kind of debugging information; takes precedence over `debug`.
    pub debug_type: Option<DebugType>,
    /// Preprocessor symbols in effect for all files.
    pub define: Vec<String>,
    /// Delay-sign the assembly using only the public part of the key.
    pub delay_sign: bool,
    /// XML documentation file to generate.
    pub doc: Option<PathBuf>,
    /// How internal compiler errors are handled.
    pub error_report: Option<ErrorReport>,
    /// Size of sections in the output file.
    pub file_align: Option<FileAlign>,
    /// List full paths in compilation errors and warnings.
    pub full_paths: bool,
    /// Display the compiler usage message.
    pub help: bool,
    /// High entropy ASLR is supported.
    pub high_entropy_va: bool,
    /// Strong name key container.
    pub key_container: Option<String>,
    /// Strong name key file.
    pub key_file: Option<PathBuf>,
    /// Language version mode: ISO-1, ISO-2, 3, 4, 5, 6, or Default.
    pub language_version: Option<String>,
    /// Directories searched for referenced assemblies.
    pub lib: Vec<PathBuf>,
    /// Assemblies whose COM type information becomes available.
    pub link: Vec<PathBuf>,
    /// Resource linked to this assembly.
    pub link_resource: Option<Resource>,
    /// Type containing the entry point.
    pub main: Option<String>,
    /// Assembly whose non-public types a .netmodule can access.
    pub module_assembly_name: Option<String>,
    /// Name of the source module.
    pub module_name: Option<String>,
    /// Do not auto-include the CSC.RSP file.
    pub no_config: bool,
    /// Suppress the compiler copyright banner.
    pub no_logo: bool,
    /// Do not reference the standard library (mscorlib.dll).
    pub no_standard_library: bool,
    /// Warning numbers to disable.
    pub no_warnings: Vec<String>,
    /// Do not embed an application manifest in the executable.
    pub no_win32_manifest: bool,
    /// Enable compiler optimizations.
    pub optimize: bool,
    /// Output file name.
    pub output_file: Option<PathBuf>,
    /// File name and location of the .pdb file.
    pub pdb: Option<PathBuf>,
    /// Platform the assembly runs on.
    pub platform: Option<Platform>,
    /// Language in which the compiler displays output.
    pub preferred_ui_language: Option<String>,
    /// Compile files in all child directories of the source directory or
    /// pattern. Only consulted for pattern and directory sources.
    pub recurse: bool,
    /// Resource embedded into this assembly.
    pub resource: Option<Resource>,
    /// Minimum subsystem version for the generated executable.
    pub subsystem_version: Option<String>,
    /// Output file format.
    pub target: Option<TargetFormat>,
    /// Allow unsafe code.
    pub unsafe_code: bool,
    /// Emit compiler messages in UTF-8.
    pub utf8_output: bool,
    /// Warning level (0-4).
    pub warning_level: Option<String>,
    /// Warning numbers treated as errors.
    pub warnings_as_errors: Vec<String>,
    /// Icon for the output file.
    pub win32_icon: Option<PathBuf>,
    /// Custom win32 manifest file.
    pub win32_manifest: Option<PathBuf>,
    /// Win32 resource file (.res).
    pub win32_resource_file: Option<PathBuf>,

    /// Explicit path to the compiler executable. Relative paths resolve
    /// against the working directory.
    pub tool_path: Option<PathBuf>,
    /// Working directory for the compiler process and the base against
    /// which relative paths are made absolute. Defaults to the process
    /// current directory.
    pub working_directory: Option<PathBuf>,
}

impl CscSettings {
    /// Build a settings record through a configuration callback.
    pub fn configure(f: impl FnOnce(&mut Self)) -> Self {
        let mut settings = Self::default();
        f(&mut settings);
        settings
    }
}
