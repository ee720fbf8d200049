//! Runner module - executes tool install and test commands.
//!
//! This module provides:
//! - Runner trait, the seam commands use to run shell commands
//! - ShellRunner, which spawns `<shell> -c <command>`
//! - MockRunner, which records commands instead of running them

mod shell;

use std::cell::RefCell;
use std::collections::HashSet;

use crate::error::Result;

pub use shell::ShellRunner;

/// How the child's output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to the terminal
    Inherit,
    /// Output is captured into the outcome
    Capture,
}

/// Result of running one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether the command exited with status 0
    pub success: bool,
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Captured stdout (empty when inherited)
    pub stdout: String,
    /// Captured stderr (empty when inherited)
    pub stderr: String,
}

impl RunOutcome {
    /// Successful outcome with no output
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
            ..Default::default()
        }
    }

    /// Failed outcome with the given exit code
    pub fn failure(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            ..Default::default()
        }
    }
}

/// Executes shell commands on behalf of commands
pub trait Runner {
    /// Run a command to completion. A non-zero exit is an outcome, not an error.
    fn run(&self, command: &str, mode: OutputMode) -> Result<RunOutcome>;
}

/// Runner that records commands and fails the ones it was told to
#[derive(Debug, Default)]
pub struct MockRunner {
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the given command exit with status 1
    pub fn failing(mut self, command: impl Into<String>) -> Self {
        self.failing.insert(command.into());
        self
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Runner for MockRunner {
    fn run(&self, command: &str, _mode: OutputMode) -> Result<RunOutcome> {
        self.calls.borrow_mut().push(command.to_string());
        if self.failing.contains(command) {
            Ok(RunOutcome::failure(1))
        } else {
            Ok(RunOutcome::success())
        }
    }
}
