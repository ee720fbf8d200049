//! `install` - run each selected tool's install command for this platform.

use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use colored::*;

use crate::container::ServiceContainer;
use crate::error::{Result, ToolboxError};
use crate::runner::{OutputMode, Runner};
use crate::tools::{ToolFilter, ToolsLoader};

use super::{tool_count, Command, CommandArgs, CommandDescriptor};

/// Placeholder replaced with the target directory in install commands
pub const TARGET_DIR_PLACEHOLDER: &str = "{target_dir}";

/// Installs tools
pub struct InstallCommand {
    loader: ToolsLoader,
    runner: Rc<dyn Runner>,
    filter: ToolFilter,
    target_dir: PathBuf,
    dry_run: bool,
}

impl InstallCommand {
    pub const NAME: &'static str = "install";

    pub const DESCRIPTOR: CommandDescriptor = CommandDescriptor {
        name: Self::NAME,
        about: "Install tools",
        factory: Self::create,
    };

    pub fn new(loader: ToolsLoader, runner: Rc<dyn Runner>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            loader,
            runner,
            filter: ToolFilter::default(),
            target_dir: target_dir.into(),
            dry_run: false,
        }
    }

    /// Set filter
    pub fn with_filter(mut self, filter: ToolFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Print commands instead of running them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn create(container: &ServiceContainer, args: CommandArgs) -> Box<dyn Command> {
        let target_dir = args
            .target_dir
            .unwrap_or_else(|| container.config().target_dir.clone());
        Box::new(
            Self::new(container.tools_loader(), container.runner(), target_dir)
                .with_filter(args.filter)
                .with_dry_run(args.dry_run),
        )
    }

    fn render(&self, command: &str) -> String {
        command.replace(TARGET_DIR_PLACEHOLDER, &self.target_dir.to_string_lossy())
    }
}

impl Command for InstallCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let registry = self.loader.load()?;
        let tools = self.filter.apply(&registry);
        log::info!(
            "Installing {} tools into {} (dry run: {})",
            tools.len(),
            self.target_dir.display(),
            self.dry_run
        );

        let mut installed = 0;
        for tool in tools {
            let Some(command) = tool.install.current_command() else {
                log::warn!("No install command for '{}' on {}", tool.id, std::env::consts::OS);
                writeln!(
                    out,
                    "{} {}: no install command for {}",
                    "Skipping".yellow(),
                    tool.name,
                    std::env::consts::OS
                )?;
                continue;
            };
            let command = self.render(command);

            if self.dry_run {
                writeln!(out, "{}", command)?;
                continue;
            }

            writeln!(out, "{} {}", "Installing".cyan(), tool.name)?;
            out.flush()?;
            let outcome = self.runner.run(&command, OutputMode::Inherit)?;
            if !outcome.success {
                return Err(ToolboxError::CommandFailed(format!(
                    "installing '{}' exited with code {}",
                    tool.id,
                    outcome.code.map_or_else(|| "none".to_string(), |c| c.to_string())
                )));
            }
            installed += 1;
        }

        if !self.dry_run {
            writeln!(out, "{} {}", "Installed".green(), tool_count(installed))?;
        }
        Ok(())
    }
}
