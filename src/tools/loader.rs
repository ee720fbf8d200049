//! Tools file loading
//!
//! Reads the configured JSON files in order and merges them into one
//! [`ToolRegistry`]. Any unreadable or malformed file aborts the load.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, ToolboxError};

use super::definition::ToolDefinition;
use super::registry::ToolRegistry;

/// Loads and merges tools files, bound to an ordered list of paths
#[derive(Debug, Clone, Default)]
pub struct ToolsLoader {
    paths: Vec<PathBuf>,
}

impl ToolsLoader {
    /// Create a loader for the given paths, in precedence order
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured paths
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Read every file and merge them, later files overriding earlier ones
    pub fn load(&self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::new();
        for path in &self.paths {
            let tools = load_file(path)?;
            let count = tools.len();
            let overridden = registry.merge(tools);
            log::info!(
                "Loaded {} tools from {} ({} overridden)",
                count,
                path.display(),
                overridden
            );
        }
        Ok(registry)
    }
}

/// Read and parse a single tools file
pub fn load_file(path: &Path) -> Result<Vec<ToolDefinition>> {
    let content = std::fs::read(path).map_err(|source| ToolboxError::ConfigNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tools(&content).map_err(|detail| ToolboxError::ConfigMalformed {
        path: path.to_path_buf(),
        detail,
    })
}

/// Parse a tools document: a JSON array of tools, or an object with a `tools` array
pub fn parse_tools(content: impl AsRef<[u8]>) -> std::result::Result<Vec<ToolDefinition>, String> {
    let document: Value = serde_json::from_slice(content.as_ref()).map_err(|e| e.to_string())?;

    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("tools")
            .ok_or_else(|| "expected an array of tools or an object with a `tools` key".to_string())?,
        other => {
            return Err(format!("expected an array of tools, found {}", json_kind(&other)));
        }
    };

    let tools: Vec<ToolDefinition> = serde_json::from_value(list).map_err(|e| e.to_string())?;
    for tool in &tools {
        tool.validate()?;
    }
    Ok(tools)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const BASE: &str = r#"[
        {"id": "composer", "name": "Composer", "install": "install-composer", "test": "composer --version"},
        {"id": "box", "name": "Box", "install": "install-box", "test": "box --version"},
        {"id": "phpunit", "name": "PHPUnit", "install": "install-phpunit", "test": "phpunit --version"}
    ]"#;

    const OVERRIDE: &str = r#"{"tools": [
        {"id": "box", "name": "Box 4", "install": "install-box4", "test": "box list"},
        {"id": "phpstan", "name": "PHPStan", "install": "install-phpstan", "test": "phpstan --version"}
    ]}"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_array_document() {
        let tools = parse_tools(BASE).unwrap();
        let ids: Vec<&str> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["composer", "box", "phpunit"]);
    }

    #[test]
    fn test_parse_wrapped_document() {
        let tools = parse_tools(OVERRIDE).unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Box 4");
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_tools("{not json").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_parse_wrong_top_level() {
        assert!(parse_tools("42").unwrap_err().contains("a number"));
        assert!(parse_tools(r#"{"tool": []}"#).unwrap_err().contains("`tools`"));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_tools(r#"[{"id": "jq", "name": "jq", "test": "jq --version"}]"#).unwrap_err();
        assert!(err.contains("install"));
    }

    #[test]
    fn test_parse_empty_id() {
        let err = parse_tools(r#"[{"id": "", "name": "jq", "install": "x", "test": "y"}]"#).unwrap_err();
        assert!(err.contains("id"));
    }

    #[test]
    fn test_load_single_file_preserves_order() {
        let dir = TempDir::new().unwrap();
        let base = write(&dir, "base.json", BASE);

        let registry = ToolsLoader::new([base]).load().unwrap();
        assert_eq!(registry.ids(), vec!["composer", "box", "phpunit"]);
    }

    #[test]
    fn test_load_later_file_overrides_in_place() {
        let dir = TempDir::new().unwrap();
        let base = write(&dir, "pre-installation.json", BASE);
        let over = write(&dir, "tools.json", OVERRIDE);

        let registry = ToolsLoader::new([base, over]).load().unwrap();
        assert_eq!(registry.ids(), vec!["composer", "box", "phpunit", "phpstan"]);

        let boxed = registry.get("box").unwrap();
        assert_eq!(boxed.name, "Box 4");
        assert_eq!(boxed.test, "box list");
    }

    #[test]
    fn test_load_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let base = write(&dir, "a.json", BASE);
        let over = write(&dir, "b.json", OVERRIDE);
        let loader = ToolsLoader::new([base, over]);

        let first = loader.load().unwrap();
        let second = loader.load().unwrap();
        assert_eq!(first.ids(), second.ids());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let base = write(&dir, "base.json", BASE);
        let missing = dir.path().join("missing.json");

        let err = ToolsLoader::new([base, missing.clone()]).load().unwrap_err();
        match err {
            ToolboxError::ConfigNotFound { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.json", r#"[{"id": "jq"}]"#);

        let err = ToolsLoader::new([bad.clone()]).load().unwrap_err();
        match err {
            ToolboxError::ConfigMalformed { path, detail } => {
                assert_eq!(path, bad);
                assert!(detail.contains("missing field"));
            }
            other => panic!("Expected ConfigMalformed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_utf8_is_malformed() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("binary.json");
        fs::write(&bad, [0x5b, 0xff, 0xfe, 0x5d]).unwrap();

        let err = ToolsLoader::new([bad.clone()]).load().unwrap_err();
        match err {
            ToolboxError::ConfigMalformed { path, .. } => assert_eq!(path, bad),
            other => panic!("Expected ConfigMalformed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_no_paths() {
        let registry = ToolsLoader::default().load().unwrap();
        assert!(registry.is_empty());
    }
}
