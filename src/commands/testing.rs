//! `test` - check which of the selected tools are available.

use std::io::Write;
use std::rc::Rc;

use colored::*;

use crate::container::ServiceContainer;
use crate::error::{Result, ToolboxError};
use crate::runner::{OutputMode, Runner};
use crate::tools::{ToolFilter, ToolsLoader};

use super::{Command, CommandArgs, CommandDescriptor};

/// Runs each tool's test command
pub struct TestCommand {
    loader: ToolsLoader,
    runner: Rc<dyn Runner>,
    filter: ToolFilter,
    dry_run: bool,
    verbose: bool,
}

impl TestCommand {
    pub const NAME: &'static str = "test";

    pub const DESCRIPTOR: CommandDescriptor = CommandDescriptor {
        name: Self::NAME,
        about: "Test if tools are installed",
        factory: Self::create,
    };

    pub fn new(loader: ToolsLoader, runner: Rc<dyn Runner>) -> Self {
        Self {
            loader,
            runner,
            filter: ToolFilter::default(),
            dry_run: false,
            verbose: false,
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

    /// Show captured output of failing checks
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn create(container: &ServiceContainer, args: CommandArgs) -> Box<dyn Command> {
        Box::new(
            Self::new(container.tools_loader(), container.runner())
                .with_filter(args.filter)
                .with_dry_run(args.dry_run)
                .with_verbose(args.verbose),
        )
    }
}

impl Command for TestCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let registry = self.loader.load()?;
        let tools = self.filter.apply(&registry);
        log::info!("Testing {} tools (dry run: {})", tools.len(), self.dry_run);

        let mut missing = Vec::new();
        for tool in &tools {
            if self.dry_run {
                writeln!(out, "{}", tool.test)?;
                continue;
            }

            let outcome = self.runner.run(&tool.test, OutputMode::Capture)?;
            if outcome.success {
                writeln!(out, "{} {}", "✔".green(), tool.name)?;
            } else {
                log::warn!("Test for '{}' failed with {:?}", tool.id, outcome.code);
                writeln!(out, "{} {}", "✘".red(), tool.name)?;
                if self.verbose {
                    for line in outcome.stdout.lines().chain(outcome.stderr.lines()) {
                        writeln!(out, "    {}", line.dimmed())?;
                    }
                }
                missing.push(tool.id.as_str());
            }
        }

        if missing.is_empty() {
            return Ok(());
        }
        Err(ToolboxError::CommandFailed(format!(
            "{} of {} tools failed: {}",
            missing.len(),
            tools.len(),
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::runner::MockRunner;
    use tempfile::TempDir;

    #[test]
    fn test_all_tools_pass() {
        let dir = TempDir::new().unwrap();
        let runner = Rc::new(MockRunner::new());
        let command = TestCommand::new(fixtures::loader(&dir), runner.clone());

        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(
            runner.calls(),
            vec!["composer --version", "phpunit --version", "jq --version"]
        );
        assert!(output.contains("Composer"));
        assert!(output.contains("jq"));
    }

    #[test]
    fn test_failures_reported_after_all_checks() {
        let dir = TempDir::new().unwrap();
        let runner = Rc::new(
            MockRunner::new()
                .failing("composer --version")
                .failing("jq --version"),
        );
        let command = TestCommand::new(fixtures::loader(&dir), runner.clone());

        let mut out = Vec::new();
        let err = command.execute(&mut out).unwrap_err();
        assert_eq!(runner.calls().len(), 3);
        match err {
            ToolboxError::CommandFailed(msg) => {
                assert_eq!(msg, "2 of 3 tools failed: composer, jq");
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_dry_run_prints_commands() {
        let dir = TempDir::new().unwrap();
        let runner = Rc::new(MockRunner::new());
        let command = TestCommand::new(fixtures::loader(&dir), runner.clone())
            .with_dry_run(true)
            .with_filter(ToolFilter::new(vec!["test".to_string()], vec![]));

        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(runner.calls().is_empty());
        assert_eq!(output.trim(), "phpunit --version");
    }
}
