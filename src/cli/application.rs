//! Application - parses arguments, resolves tool paths and dispatches.
//!
//! Startup happens in two phases. Arguments and environment are first
//! resolved into a list of tools files, then the service container is built
//! and the selected command is constructed from it. Tools files are only read
//! once the command runs.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{CommandFactory, Parser};
use colored::*;
use eyre::{Context, Result};

use crate::config::Config;
use crate::container::ServiceContainer;
use crate::error::{ToolboxError, EXIT_FAILURE};
use crate::runner::Runner;

use super::commands::Cli;
use super::loader::CommandLoader;

/// Environment variable holding a comma-separated list of tools files
pub const TOOLS_ENV: &str = "TOOLBOX_JSON";

/// `resources/` shipped next to an installed binary, if there is one
pub fn bundled_resources(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?.join("resources");
    dir.is_dir().then_some(dir)
}

fn resources_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| bundled_resources(&exe))
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"))
}

/// Built-in tools files, pre-installation first.
///
/// Looked up in `resources/` beside the executable, then in the source tree
/// the binary was built from.
pub fn default_tool_paths() -> Vec<PathBuf> {
    let resources = resources_dir();
    vec![resources.join("pre-installation.json"), resources.join("tools.json")]
}

/// Default for `--tools`: the env value split on commas, or the built-in files
pub fn tools_default(env_value: Option<&str>) -> Vec<PathBuf> {
    let from_env: Vec<PathBuf> = env_value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect();

    if from_env.is_empty() {
        default_tool_paths()
    } else {
        from_env
    }
}

/// Paths given with `--tools`, or the default when none were given
pub fn resolve_tool_paths(cli_tools: &[PathBuf], env_value: Option<&str>) -> Vec<PathBuf> {
    if cli_tools.is_empty() {
        tools_default(env_value)
    } else {
        cli_tools.to_vec()
    }
}

/// Top-level entry point
pub struct Application {
    loader: CommandLoader,
    tools_env: Option<OsString>,
    config: Option<Config>,
    runner: Option<Rc<dyn Runner>>,
}

impl Application {
    /// Create the application with the built-in commands.
    ///
    /// Fails when a clap subcommand has no registered constructor.
    pub fn new() -> crate::Result<Self> {
        let loader = CommandLoader::builtin()?;
        for sub in Cli::command().get_subcommands() {
            if !loader.has(sub.get_name()) {
                return Err(ToolboxError::InvalidCommand(format!(
                    "subcommand '{}' has no registered command",
                    sub.get_name()
                )));
            }
        }

        Ok(Self {
            loader,
            tools_env: std::env::var_os(TOOLS_ENV),
            config: None,
            runner: None,
        })
    }

    /// Override the value read from `TOOLBOX_JSON`
    pub fn with_tools_env<S: Into<OsString>>(mut self, value: Option<S>) -> Self {
        self.tools_env = value.map(Into::into);
        self
    }

    /// Use this config instead of loading one
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this runner instead of the configured shell
    pub fn with_runner(mut self, runner: Rc<dyn Runner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Registered commands
    pub fn loader(&self) -> &CommandLoader {
        &self.loader
    }

    /// Parse `args`, run the selected command and return the exit status
    pub fn run<'a, I, T>(&self, args: I, out: &'a mut dyn Write, err: &'a mut dyn Write) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                let target = if e.use_stderr() { err } else { out };
                let _ = write!(target, "{}", e);
                return e.exit_code();
            }
        };

        match self.dispatch(cli, out) {
            Ok(()) => 0,
            Err(e) => {
                log::error!("{:#}", e);
                let _ = writeln!(err, "{} {:#}", "Error:".red().bold(), e);
                match e.downcast_ref::<ToolboxError>() {
                    Some(toolbox_err) => {
                        if matches!(toolbox_err, ToolboxError::CommandNotFound { .. }) {
                            let _ = self.write_commands(err);
                        }
                        toolbox_err.exit_code()
                    }
                    None => EXIT_FAILURE,
                }
            }
        }
    }

    fn write_commands(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let descriptors = self.loader.descriptors();
        let width = descriptors.iter().map(|d| d.name.len()).max().unwrap_or(0);
        writeln!(out)?;
        writeln!(out, "Available commands:")?;
        for descriptor in descriptors {
            let name = format!("{:<width$}", descriptor.name, width = width);
            writeln!(out, "  {}  {}", name.green(), descriptor.about)?;
        }
        Ok(())
    }

    /// Tools files for this run: `--tools`, else `TOOLBOX_JSON`, else the built-in files
    fn tool_paths(&self, cli_tools: &[PathBuf]) -> crate::Result<Vec<PathBuf>> {
        if !cli_tools.is_empty() {
            return Ok(cli_tools.to_vec());
        }
        let env_value = match &self.tools_env {
            Some(value) => Some(value.to_str().ok_or_else(|| ToolboxError::InvalidEnvironment {
                name: TOOLS_ENV,
                value: value.to_string_lossy().into_owned(),
            })?),
            None => None,
        };
        Ok(resolve_tool_paths(cli_tools, env_value))
    }

    fn dispatch(&self, cli: Cli, out: &mut dyn Write) -> Result<()> {
        let verbose = cli.is_verbose();
        let Some(command) = cli.command else {
            writeln!(out, "{}", Cli::command().render_help())?;
            return Ok(());
        };

        let name = command.name().to_string();
        if !self.loader.has(&name) {
            return Err(ToolboxError::CommandNotFound {
                name,
                known: self.loader.names().into_iter().map(String::from).collect(),
            }
            .into());
        }

        let config = match &self.config {
            Some(config) => config.clone(),
            None => Config::load(cli.config.as_ref()).context("Failed to load configuration")?,
        };
        let tool_paths = self.tool_paths(&cli.tools)?;
        log::info!("Running '{}' with tools from {:?}", name, tool_paths);

        let mut container = ServiceContainer::new(config, tool_paths);
        if let Some(runner) = &self.runner {
            container = container.with_runner(Rc::clone(runner));
        }

        let command = self.loader.get(&name, &container, command.into_args(verbose))?;
        command.execute(out)?;
        Ok(())
    }
}
