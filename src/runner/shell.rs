//! Shell runner - spawns commands through `<shell> -c`.

use std::process::{Command, Stdio};

use crate::error::Result;

use super::{OutputMode, RunOutcome, Runner};

/// Runs commands through a POSIX-style shell
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

impl ShellRunner {
    /// Create a runner using the given shell binary
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Runner for ShellRunner {
    fn run(&self, command: &str, mode: OutputMode) -> Result<RunOutcome> {
        log::debug!("Running `{} -c {}`", self.shell, command);

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command).stdin(Stdio::null());

        let outcome = match mode {
            OutputMode::Inherit => {
                let status = cmd.status()?;
                RunOutcome {
                    success: status.success(),
                    code: status.code(),
                    ..Default::default()
                }
            }
            OutputMode::Capture => {
                let output = cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;
                RunOutcome {
                    success: output.status.success(),
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                }
            }
        };

        log::debug!("`{}` exited with {:?}", command, outcome.code);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        let runner = ShellRunner::default();
        let outcome = runner.run("echo hello", OutputMode::Capture).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.code, Some(0));
        assert_eq!(outcome.stdout.trim(), "hello");
    }

    #[test]
    fn test_failing_command() {
        let runner = ShellRunner::default();
        let outcome = runner.run("exit 3", OutputMode::Capture).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.code, Some(3));
    }

    #[test]
    fn test_captures_stderr() {
        let runner = ShellRunner::default();
        let outcome = runner.run("echo oops >&2; exit 1", OutputMode::Capture).unwrap();
        assert!(!outcome.success);
        assert!(outcome.stderr.contains("oops"));
    }

    #[test]
    fn test_missing_shell_is_io_error() {
        let runner = ShellRunner::new("/nonexistent/shell");
        let err = runner.run("true", OutputMode::Capture).unwrap_err();
        assert!(matches!(err, crate::error::ToolboxError::Io(_)));
    }
}
