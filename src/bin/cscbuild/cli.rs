//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// cscbuild - Invoke the Microsoft C# compiler from a settings file and flags
#[derive(Parser)]
#[command(name = "cscbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to compile; a glob pattern with --pattern, a directory
    /// with --dir
    pub source: String,

    /// Treat SOURCE as a glob pattern
    #[arg(long, conflicts_with = "dir")]
    pub pattern: bool,

    /// Treat SOURCE as a directory
    #[arg(long)]
    pub dir: bool,

    /// Compiler settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Working directory for the compiler process
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Explicit path to the compiler executable
    #[arg(long)]
    pub tool_path: Option<PathBuf>,

    /// Output file name
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Preprocessor symbols (repeatable)
    #[arg(short = 'D', long = "define")]
    pub define: Vec<String>,

    /// Emit debugging information
    #[arg(long)]
    pub debug: bool,

    /// Enable compiler optimizations
    #[arg(long)]
    pub optimize: bool,

    /// Suppress the compiler banner
    #[arg(long)]
    pub nologo: bool,

    /// Allow unsafe code
    #[arg(long = "unsafe")]
    pub unsafe_code: bool,

    /// Compile files in all child directories (pattern/directory sources)
    #[arg(short, long)]
    pub recurse: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
