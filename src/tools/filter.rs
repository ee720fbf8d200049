//! Tag based tool selection

use super::definition::ToolDefinition;
use super::registry::ToolRegistry;

/// Selects tools by tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    /// Keep tools carrying at least one of these (all tools when empty)
    pub tags: Vec<String>,
    /// Drop tools carrying any of these
    pub exclude_tags: Vec<String>,
}

impl ToolFilter {
    /// Create a filter
    pub fn new(tags: Vec<String>, exclude_tags: Vec<String>) -> Self {
        Self { tags, exclude_tags }
    }

    /// Check whether a tool passes the filter
    pub fn matches(&self, tool: &ToolDefinition) -> bool {
        if self.exclude_tags.iter().any(|t| tool.has_tag(t)) {
            return false;
        }
        self.tags.is_empty() || self.tags.iter().any(|t| tool.has_tag(t))
    }

    /// Matching tools in registry order
    pub fn apply<'a>(&self, registry: &'a ToolRegistry) -> Vec<&'a ToolDefinition> {
        registry.iter().filter(|tool| self.matches(tool)).collect()
    }
}
