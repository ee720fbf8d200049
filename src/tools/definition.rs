//! Tool definitions as declared in the tools JSON files
//!
//! A tool carries display metadata, an install instruction and a test command
//! whose exit status tells whether the tool is present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Platform key used when no entry matches the current OS
pub const DEFAULT_PLATFORM: &str = "default";

/// How a tool gets installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstallInstruction {
    /// One shell command used on every platform
    Command(String),
    /// Shell command per platform (`linux`, `macos`, `windows`, `default`)
    PerPlatform(BTreeMap<String, String>),
}

impl InstallInstruction {
    /// Command to run on the given platform, falling back to `default`
    pub fn command_for(&self, platform: &str) -> Option<&str> {
        match self {
            Self::Command(cmd) => Some(cmd.as_str()),
            Self::PerPlatform(map) => map
                .get(platform)
                .or_else(|| map.get(DEFAULT_PLATFORM))
                .map(String::as_str),
        }
    }

    /// Command to run on the platform this binary was built for
    pub fn current_command(&self) -> Option<&str> {
        self.command_for(std::env::consts::OS)
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Command(cmd) => cmd.trim().is_empty(),
            Self::PerPlatform(map) => map.values().all(|cmd| cmd.trim().is_empty()),
        }
    }
}

/// A single external tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier within the merged registry
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line summary shown by `list`
    #[serde(default)]
    pub description: String,
    /// Project homepage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Install instruction
    pub install: InstallInstruction,
    /// Command that succeeds when the tool is available
    pub test: String,
    /// Free-form labels used by `--tag` / `--exclude-tag`
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ToolDefinition {
    /// Create a tool with a single install command
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        install: impl Into<String>,
        test: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            website: None,
            install: InstallInstruction::Command(install.into()),
            test: test.into(),
            tags: Vec::new(),
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether the tool carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check the fields serde cannot enforce on its own
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("tool with empty `id`".to_string());
        }
        if self.name.trim().is_empty() {
            return Err(format!("tool '{}' has an empty `name`", self.id));
        }
        if self.test.trim().is_empty() {
            return Err(format!("tool '{}' has an empty `test` command", self.id));
        }
        if self.install.is_empty() {
            return Err(format!("tool '{}' has no `install` command", self.id));
        }
        Ok(())
    }
}
