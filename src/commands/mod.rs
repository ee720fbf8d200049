//! Commands - the runnable units behind `install`, `list` and `test`.
//!
//! Each command is built from the [`ServiceContainer`] and its parsed
//! arguments by the constructor in its [`CommandDescriptor`].

mod install;
mod list;
mod testing;

use std::io::Write;
use std::path::PathBuf;

use crate::container::ServiceContainer;
use crate::error::Result;
use crate::tools::ToolFilter;

pub use install::InstallCommand;
pub use list::ListCommand;
pub use testing::TestCommand;

/// A constructed, ready to run command
pub trait Command {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// Run the command, writing user-facing output to `out`
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Arguments a command may be constructed with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub filter: ToolFilter,
    pub dry_run: bool,
    pub target_dir: Option<PathBuf>,
    pub verbose: bool,
}

/// Builds a command from the container and its arguments
pub type CommandFactory = fn(&ServiceContainer, CommandArgs) -> Box<dyn Command>;

/// Registration entry: command name to constructor
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub about: &'static str,
    pub factory: CommandFactory,
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("about", &self.about)
            .finish()
    }
}

/// "1 tool", "3 tools"
pub(crate) fn tool_count(count: usize) -> String {
    if count == 1 {
        "1 tool".to_string()
    } else {
        format!("{} tools", count)
    }
}

/// Built-in commands in registration order
pub fn builtin() -> Vec<CommandDescriptor> {
    vec![InstallCommand::DESCRIPTOR, ListCommand::DESCRIPTOR, TestCommand::DESCRIPTOR]
}
