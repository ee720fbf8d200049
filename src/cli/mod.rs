//! CLI module for toolbox - argument parsing, command registration and dispatch.
//!
//! Provides the Application entry point, the clap definitions and the
//! command loader.

pub mod application;
pub mod commands;
pub mod loader;

pub use application::{default_tool_paths, resolve_tool_paths, tools_default, Application, TOOLS_ENV};
pub use commands::{Cli, Commands};
pub use loader::CommandLoader;
