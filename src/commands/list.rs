//! `list` - print the selected tools in registry order.

use std::io::Write;

use colored::*;

use crate::container::ServiceContainer;
use crate::error::Result;
use crate::tools::{ToolFilter, ToolsLoader};

use super::{tool_count, Command, CommandArgs, CommandDescriptor};

/// Lists available tools
pub struct ListCommand {
    loader: ToolsLoader,
    filter: ToolFilter,
}

impl ListCommand {
    pub const NAME: &'static str = "list";

    pub const DESCRIPTOR: CommandDescriptor = CommandDescriptor {
        name: Self::NAME,
        about: "List available tools",
        factory: Self::create,
    };

    pub fn new(loader: ToolsLoader, filter: ToolFilter) -> Self {
        Self { loader, filter }
    }

    fn create(container: &ServiceContainer, args: CommandArgs) -> Box<dyn Command> {
        Box::new(Self::new(container.tools_loader(), args.filter))
    }
}

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let registry = self.loader.load()?;
        let tools = self.filter.apply(&registry);
        log::info!("Listing {} of {} tools", tools.len(), registry.len());

        if tools.is_empty() {
            writeln!(out, "{}", "No tools found".yellow())?;
            return Ok(());
        }

        let width = tools.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for tool in &tools {
            let name = format!("{:<width$}", tool.name, width = width);
            if tool.description.is_empty() {
                writeln!(out, "  {}", name.green())?;
            } else {
                writeln!(out, "  {}  {}", name.green(), tool.description)?;
            }
        }
        writeln!(out)?;
        writeln!(out, "{}", tool_count(tools.len()))?;
        Ok(())
    }
}
