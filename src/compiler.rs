//! csc tool execution.
//!
//! `CscCompiler` maps a [`CscSettings`](crate::settings::CscSettings) record
//! onto the compiler's switch syntax in a fixed field order, appends the
//! source reference, and hands the result to the injected process runner.
//! The mapping itself performs no I/O; path resolution is textual.

use std::env;
use std::path::{Path, PathBuf};

use crate::args::{self, ArgumentBuilder};
use crate::error::CscError;
use crate::paths;
use crate::runner::{
    Globber, ProcessRunner, SystemGlobber, SystemProcessRunner, SystemToolLocator, ToolLocator,
};
use crate::settings::{switch, CscSettings, Resource};

/// Name of the wrapped tool, used in error messages.
pub const TOOL_NAME: &str = "csc";

/// Executable names searched when no explicit tool path is configured.
pub const TOOL_EXECUTABLE_NAMES: &[&str] = &["csc.exe"];

/// Invokes the C# compiler for a file, glob pattern, or directory source.
pub struct CscCompiler<L, R, G> {
    locator: L,
    runner: R,
    globber: G,
}

impl CscCompiler<SystemToolLocator, SystemProcessRunner, SystemGlobber> {
    /// Create a compiler wired to the real filesystem and PATH.
    pub fn new() -> Self {
        CscCompiler {
            locator: SystemToolLocator,
            runner: SystemProcessRunner,
            globber: SystemGlobber,
        }
    }
}

impl Default for CscCompiler<SystemToolLocator, SystemProcessRunner, SystemGlobber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ToolLocator, R: ProcessRunner, G: Globber> CscCompiler<L, R, G> {
    /// Create a compiler with injected capabilities.
    pub fn with_capabilities(locator: L, runner: R, globber: G) -> Self {
        CscCompiler {
            locator,
            runner,
            globber,
        }
    }

    /// Compile a single source file.
    pub fn compile_file(&self, source_file: &Path, settings: &CscSettings) -> Result<(), CscError> {
        if source_file.as_os_str().is_empty() {
            return Err(CscError::InvalidArgument("source_file"));
        }

        let arguments = self.build_file_arguments(source_file, settings);
        self.run(settings, &arguments)
    }

    /// Compile the files matched by a glob pattern.
    pub fn compile_pattern(&self, pattern: &str, settings: &CscSettings) -> Result<(), CscError> {
        if pattern.is_empty() {
            return Err(CscError::InvalidArgument("pattern"));
        }

        // TODO: this range check errors when the pattern matches files and
        // accepts a pattern matching nothing; verify the intended polarity.
        let working_dir = effective_working_dir(settings);
        if !self.globber.matches(pattern, &working_dir).is_empty() {
            return Err(CscError::PatternOutOfRange("pattern"));
        }

        let arguments = self.build_pattern_arguments(pattern, settings);
        self.run(settings, &arguments)
    }

    /// Compile all sources under a directory.
    pub fn compile_directory(
        &self,
        directory: &Path,
        settings: &CscSettings,
    ) -> Result<(), CscError> {
        if directory.as_os_str().is_empty() {
            return Err(CscError::InvalidArgument("directory_path"));
        }

        let arguments = self.build_directory_arguments(directory, settings);
        self.run(settings, &arguments)
    }

    /// Arguments for a single-file source: settings switches, then the
    /// quoted absolute source path.
    pub fn build_file_arguments(
        &self,
        source_file: &Path,
        settings: &CscSettings,
    ) -> ArgumentBuilder {
        let working_dir = effective_working_dir(settings);
        let mut builder = settings_arguments(settings, &working_dir);
        builder.append_quoted(paths::make_absolute(&working_dir, source_file));
        builder
    }

    /// Arguments for a glob-pattern source. The pattern is emitted raw and
    /// unquoted behind `/recurse`, and only when the recurse flag is set;
    /// otherwise no source token is produced.
    pub fn build_pattern_arguments(&self, pattern: &str, settings: &CscSettings) -> ArgumentBuilder {
        let working_dir = effective_working_dir(settings);
        let mut builder = settings_arguments(settings, &working_dir);
        if settings.recurse {
            builder.append_switch(switch::RECURSE, ":", pattern);
        }
        builder
    }

    /// Arguments for a directory source. The directory resolves to its
    /// quoted absolute form behind `/recurse`, and only when the recurse
    /// flag is set; otherwise no source token is produced.
    pub fn build_directory_arguments(
        &self,
        directory: &Path,
        settings: &CscSettings,
    ) -> ArgumentBuilder {
        let working_dir = effective_working_dir(settings);
        let mut builder = settings_arguments(settings, &working_dir);
        if settings.recurse {
            builder.append_switch_quoted(
                switch::RECURSE,
                ":",
                paths::make_absolute(&working_dir, directory),
            );
        }
        builder
    }

    fn run(&self, settings: &CscSettings, arguments: &ArgumentBuilder) -> Result<(), CscError> {
        let working_dir = effective_working_dir(settings);

        let tool = self
            .locator
            .locate(
                TOOL_EXECUTABLE_NAMES,
                settings.tool_path.as_deref(),
                &working_dir,
            )
            .ok_or(CscError::ToolNotFound { tool: TOOL_NAME })?;

        tracing::debug!(
            tool = %tool.display(),
            args = %arguments.render(),
            "invoking compiler"
        );

        let code = self
            .runner
            .run(&tool, arguments.tokens(), &working_dir)
            .map_err(|_| CscError::ProcessNotStarted { tool: TOOL_NAME })?;

        if code != 0 {
            return Err(CscError::NonZeroExit {
                tool: TOOL_NAME,
                code,
            });
        }

        tracing::info!("compilation finished");
        Ok(())
    }
}

/// Working directory the compiler runs in and paths resolve against.
fn effective_working_dir(settings: &CscSettings) -> PathBuf {
    settings
        .working_directory
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_default())
}

/// Resolve each path absolute, quote it, and join with the delimiter.
fn quoted_path_list(list: &[PathBuf], working_dir: &Path, delimiter: &str) -> String {
    args::join_quoted(
        list.iter().map(|p| paths::make_absolute(working_dir, p)),
        delimiter,
    )
}

/// Serialize a resource switch: the quoted file path, then the identifier
/// tag and accessibility modifier, each independently optional.
fn resource_arguments(
    builder: &mut ArgumentBuilder,
    switch_name: &str,
    resource: &Resource,
    working_dir: &Path,
) {
    if resource.file.as_os_str().is_empty() {
        return;
    }

    builder.append_switch_quoted(
        switch_name,
        ":",
        paths::make_absolute(working_dir, &resource.file),
    );

    match (&resource.identifier, &resource.accessibility_modifier) {
        (Some(identifier), Some(modifier)) => {
            builder.append(format!("{}:{identifier} {modifier}", switch::RESOURCE_TAG));
        }
        (Some(identifier), None) => {
            builder.append(format!("{}:{identifier}", switch::RESOURCE_TAG));
        }
        (None, Some(modifier)) => builder.append(modifier.clone()),
        (None, None) => {}
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Serialize the settings switches in their fixed, stable order.
fn settings_arguments(settings: &CscSettings, working_dir: &Path) -> ArgumentBuilder {
    let mut builder = ArgumentBuilder::new();

    if !settings.modules.is_empty() {
        builder.append_switch(
            switch::ADD_MODULE,
            ":",
            quoted_path_list(&settings.modules, working_dir, ";"),
        );
    }

    if let Some(ref app_config) = settings.app_config {
        builder.append_switch_quoted(
            switch::APP_CONFIG,
            ":",
            paths::make_absolute(working_dir, app_config),
        );
    }

    if let Some(base_address) = non_empty(&settings.base_address) {
        builder.append_switch(switch::BASE_ADDRESS, ":", base_address);
    }

    if let Some(ref bug_report) = settings.bug_report {
        builder.append_switch_quoted(
            switch::BUG_REPORT,
            ":",
            paths::make_absolute(working_dir, bug_report),
        );
    }

    if settings.checked == Some(true) {
        builder.append(switch::CHECKED);
    }

    if let Some(algorithm) = settings.checksum_algorithm {
        builder.append_switch(switch::CHECKSUM_ALGORITHM, ":", algorithm.as_str());
    }

    if let Some(code_page) = non_empty(&settings.code_page) {
        builder.append_switch(switch::CODE_PAGE, ":", code_page);
    }

    // The sub-type wins over the plain flag; never both.
    if settings.debug || settings.debug_type.is_some() {
        match settings.debug_type {
            Some(debug_type) => builder.append_switch(switch::DEBUG, ":", debug_type.as_str()),
            None => builder.append(switch::DEBUG),
        }
    }

    if !settings.define.is_empty() {
        builder.append_switch(switch::DEFINE, ":", args::join(&settings.define, ";"));
    }

    if settings.delay_sign {
        builder.append(switch::DELAY_SIGN);
    }

    if let Some(ref doc) = settings.doc {
        builder.append_switch_quoted(switch::DOC, ":", paths::make_absolute(working_dir, doc));
    }

    if let Some(error_report) = settings.error_report {
        builder.append_switch(switch::ERROR_REPORT, ":", error_report.as_str());
    }

    if let Some(file_align) = settings.file_align {
        builder.append_switch(switch::FILE_ALIGN, ":", file_align.as_str());
    }

    if settings.full_paths {
        builder.append(switch::FULL_PATHS);
    }

    if settings.help {
        builder.append(switch::HELP);
    }

    if settings.high_entropy_va {
        builder.append(switch::HIGH_ENTROPY_VA);
    }

    if let Some(key_container) = non_empty(&settings.key_container) {
        builder.append_switch(switch::KEY_CONTAINER, ":", key_container);
    }

    if let Some(ref key_file) = settings.key_file {
        builder.append_switch_quoted(
            switch::KEY_FILE,
            ":",
            paths::make_absolute(working_dir, key_file),
        );
    }

    if let Some(language_version) = non_empty(&settings.language_version) {
        builder.append_switch(switch::LANGUAGE_VERSION, ":", language_version);
    }

    if !settings.lib.is_empty() {
        builder.append_switch(
            switch::LIB,
            ":",
            quoted_path_list(&settings.lib, working_dir, ","),
        );
    }

    if !settings.link.is_empty() {
        builder.append_switch(
            switch::LINK,
            ":",
            quoted_path_list(&settings.link, working_dir, ";"),
        );
    }

    if let Some(ref link_resource) = settings.link_resource {
        resource_arguments(&mut builder, switch::LINK_RESOURCE, link_resource, working_dir);
    }

    if let Some(main) = non_empty(&settings.main) {
        builder.append_switch(switch::MAIN, ":", main);
    }

    if let Some(module_assembly_name) = non_empty(&settings.module_assembly_name) {
        builder.append_switch(switch::MODULE_ASSEMBLY_NAME, ":", module_assembly_name);
    }

    if let Some(module_name) = non_empty(&settings.module_name) {
        builder.append_switch(switch::MODULE_NAME, ":", module_name);
    }

    if settings.no_config {
        builder.append(switch::NO_CONFIG);
    }

    if settings.no_logo {
        builder.append(switch::NO_LOGO);
    }

    if settings.no_standard_library {
        builder.append(switch::NO_STDLIB);
    }

    if !settings.no_warnings.is_empty() {
        builder.append_switch(switch::NO_WARN, ":", args::join(&settings.no_warnings, ","));
    }

    if settings.no_win32_manifest {
        builder.append(switch::NO_WIN32_MANIFEST);
    }

    if settings.optimize {
        builder.append(switch::OPTIMIZE);
    }

    if let Some(ref output_file) = settings.output_file {
        builder.append_switch_quoted(
            switch::OUT,
            ":",
            paths::make_absolute(working_dir, output_file),
        );
    }

    if let Some(ref pdb) = settings.pdb {
        builder.append_switch_quoted(switch::PDB, ":", paths::make_absolute(working_dir, pdb));
    }

    if let Some(platform) = settings.platform {
        builder.append_switch(switch::PLATFORM, ":", platform.as_str());
    }

    if let Some(language) = non_empty(&settings.preferred_ui_language) {
        builder.append_switch(switch::PREFERRED_UI_LANGUAGE, ":", language);
    }

    if let Some(ref resource) = settings.resource {
        resource_arguments(&mut builder, switch::RESOURCE, resource, working_dir);
    }

    if let Some(subsystem_version) = non_empty(&settings.subsystem_version) {
        builder.append_switch(switch::SUBSYSTEM_VERSION, ":", subsystem_version);
    }

    if let Some(target) = settings.target {
        builder.append_switch(switch::TARGET, ":", target.as_str());
    }

    if settings.unsafe_code {
        builder.append(switch::UNSAFE);
    }

    if settings.utf8_output {
        builder.append(switch::UTF8_OUTPUT);
    }

    if let Some(warning_level) = non_empty(&settings.warning_level) {
        builder.append_switch(switch::WARN, ":", warning_level);
    }

    if !settings.warnings_as_errors.is_empty() {
        builder.append_switch(
            switch::WARN_AS_ERROR,
            ":",
            args::join(&settings.warnings_as_errors, ","),
        );
    }

    if let Some(ref win32_icon) = settings.win32_icon {
        builder.append_switch_quoted(
            switch::WIN32_ICON,
            ":",
            paths::make_absolute(working_dir, win32_icon),
        );
    }

    // TODO: the ": " separator leaves a space between the switch and its
    // value; verify csc accepts it before tightening to ":".
    if let Some(ref win32_manifest) = settings.win32_manifest {
        builder.append_switch_quoted(
            switch::WIN32_MANIFEST,
            ": ",
            paths::make_absolute(working_dir, win32_manifest),
        );
    }

    if let Some(ref win32_resource_file) = settings.win32_resource_file {
        builder.append_switch_quoted(
            switch::WIN32_RES,
            ":",
            paths::make_absolute(working_dir, win32_resource_file),
        );
    }

    builder
}
