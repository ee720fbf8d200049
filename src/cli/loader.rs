//! Command loader - maps command names to constructors.

use crate::commands::{Command, CommandArgs, CommandDescriptor};
use crate::container::ServiceContainer;
use crate::error::{Result, ToolboxError};

/// Registration table checked once at startup
#[derive(Debug, Clone)]
pub struct CommandLoader {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandLoader {
    /// Create a loader, rejecting empty or duplicate command names
    pub fn new(descriptors: Vec<CommandDescriptor>) -> Result<Self> {
        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptor.name.trim().is_empty() {
                return Err(ToolboxError::InvalidCommand(format!(
                    "command #{} has an empty name",
                    i
                )));
            }
            if descriptors[..i].iter().any(|d| d.name == descriptor.name) {
                return Err(ToolboxError::InvalidCommand(format!(
                    "command '{}' registered twice",
                    descriptor.name
                )));
            }
        }
        Ok(Self { descriptors })
    }

    /// Loader with the built-in `install`, `list` and `test` commands
    pub fn builtin() -> Result<Self> {
        Self::new(crate::commands::builtin())
    }

    /// Check whether a command is registered
    pub fn has(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name == name)
    }

    /// Registered command names, in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    /// Registered descriptors
    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Construct the named command
    pub fn get(
        &self,
        name: &str,
        container: &ServiceContainer,
        args: CommandArgs,
    ) -> Result<Box<dyn Command>> {
        let descriptor = self
            .descriptors
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ToolboxError::CommandNotFound {
                name: name.to_string(),
                known: self.names().into_iter().map(String::from).collect(),
            })?;
        log::debug!("Constructing command '{}'", descriptor.name);
        Ok((descriptor.factory)(container, args))
    }
}
