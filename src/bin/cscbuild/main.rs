//! cscbuild CLI - invoke the C# compiler from settings and flags

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cscbuild::{config, CscCompiler, CscSettings};

mod cli;

use cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cscbuild=debug")
    } else {
        EnvFilter::new("cscbuild=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let settings = build_settings(&cli)?;
    let compiler = CscCompiler::new();

    if cli.pattern {
        compiler.compile_pattern(&cli.source, &settings)?;
    } else if cli.dir {
        compiler.compile_directory(Path::new(&cli.source), &settings)?;
    } else {
        compiler.compile_file(Path::new(&cli.source), &settings)?;
    }

    Ok(())
}

/// Settings from the config file, with flag overrides applied on top.
fn build_settings(cli: &Cli) -> Result<CscSettings> {
    let mut settings = match cli.config {
        Some(ref path) => config::load(path)?,
        None => CscSettings::default(),
    };

    if let Some(ref working_dir) = cli.working_dir {
        settings.working_directory = Some(working_dir.clone());
    }
    if let Some(ref tool_path) = cli.tool_path {
        settings.tool_path = Some(tool_path.clone());
    }
    if let Some(ref out) = cli.out {
        settings.output_file = Some(out.clone());
    }
    if !cli.define.is_empty() {
        settings.define = cli.define.clone();
    }
    if cli.debug {
        settings.debug = true;
    }
    if cli.optimize {
        settings.optimize = true;
    }
    if cli.nologo {
        settings.no_logo = true;
    }
    if cli.unsafe_code {
        settings.unsafe_code = true;
    }
    if cli.recurse {
        settings.recurse = true;
    }

    Ok(settings)
}
