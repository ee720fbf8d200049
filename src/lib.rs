//! Toolbox - install, list and test external developer tools
//!
//! Tools are declared in JSON files. Several files can be merged, later files
//! overriding tools of the same id, and the `install`, `list` and `test`
//! commands operate on the merged list.

pub mod cli;
pub mod commands;
pub mod config;
pub mod container;
pub mod error;
pub mod runner;
pub mod tools;

pub use error::{Result, ToolboxError};
