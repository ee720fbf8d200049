//! Service container - resolved parameters and collaborators for one run.
//!
//! Built once after argument parsing; commands take what they need from it
//! at construction time.

use std::path::PathBuf;
use std::rc::Rc;

use crate::config::Config;
use crate::runner::{Runner, ShellRunner};
use crate::tools::ToolsLoader;

/// Process-scoped services handed to command constructors
pub struct ServiceContainer {
    config: Config,
    tool_paths: Vec<PathBuf>,
    runner: Rc<dyn Runner>,
}

impl ServiceContainer {
    /// Create a container with a shell runner built from the config
    pub fn new(config: Config, tool_paths: Vec<PathBuf>) -> Self {
        log::debug!("Tool paths: {:?}", tool_paths);
        let runner = Rc::new(ShellRunner::new(config.shell.clone()));
        Self {
            config,
            tool_paths,
            runner,
        }
    }

    /// Replace the process runner
    pub fn with_runner(mut self, runner: Rc<dyn Runner>) -> Self {
        self.runner = runner;
        self
    }

    /// Application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolved tools file paths, in precedence order
    pub fn tool_paths(&self) -> &[PathBuf] {
        &self.tool_paths
    }

    /// Loader bound to the resolved tool paths. Nothing is read until `load`.
    pub fn tools_loader(&self) -> ToolsLoader {
        ToolsLoader::new(self.tool_paths.iter().cloned())
    }

    /// Shared process runner
    pub fn runner(&self) -> Rc<dyn Runner> {
        Rc::clone(&self.runner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{MockRunner, OutputMode};

    #[test]
    fn test_loader_bound_to_paths() {
        let container = ServiceContainer::new(
            Config::default(),
            vec![PathBuf::from("/a.json"), PathBuf::from("/b.json")],
        );
        let loader = container.tools_loader();
        assert_eq!(loader.paths(), container.tool_paths());
    }

    #[test]
    fn test_with_runner() {
        let mock = Rc::new(MockRunner::new());
        let container = ServiceContainer::new(Config::default(), vec![]).with_runner(mock.clone());

        container.runner().run("jq --version", OutputMode::Capture).unwrap();
        assert_eq!(mock.calls(), vec!["jq --version"]);
    }
}
