//! Ordered, deduplicated collection of tool definitions
//!
//! Tools keep the position of their first appearance. A later definition with
//! the same id replaces the earlier one in place.

use std::collections::HashMap;

use super::definition::ToolDefinition;

/// Merged tool list shared by all commands
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from tools in order, later ids overriding earlier ones
    pub fn from_tools(tools: impl IntoIterator<Item = ToolDefinition>) -> Self {
        let mut registry = Self::new();
        registry.merge(tools);
        registry
    }

    /// Insert or replace a tool, returning the definition it replaced
    pub fn upsert(&mut self, tool: ToolDefinition) -> Option<ToolDefinition> {
        match self.index.get(&tool.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.tools[pos], tool)),
            None => {
                self.index.insert(tool.id.clone(), self.tools.len());
                self.tools.push(tool);
                None
            }
        }
    }

    /// Merge a batch of tools, returning how many existing entries were overridden
    pub fn merge(&mut self, tools: impl IntoIterator<Item = ToolDefinition>) -> usize {
        let mut overridden = 0;
        for tool in tools {
            let id = tool.id.clone();
            if self.upsert(tool).is_some() {
                log::debug!("Tool '{}' overridden by a later definition", id);
                overridden += 1;
            }
        }
        overridden
    }

    /// Get a tool by id
    pub fn get(&self, id: &str) -> Option<&ToolDefinition> {
        self.index.get(id).map(|&pos| &self.tools[pos])
    }

    /// Check if a tool exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Tool ids in registry order
    pub fn ids(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.id.as_str()).collect()
    }

    /// All tools in registry order
    pub fn iter(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    /// Get number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'a ToolDefinition;
    type IntoIter = std::slice::Iter<'a, ToolDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
