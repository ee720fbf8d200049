//! Tool System - tool definitions, file loading, merging and filtering

mod definition;
mod filter;
mod loader;
mod registry;

pub use definition::{InstallInstruction, ToolDefinition, DEFAULT_PLATFORM};
pub use filter::ToolFilter;
pub use loader::{load_file, parse_tools, ToolsLoader};
pub use registry::ToolRegistry;
