//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - install: install tools
//! - list: list available tools
//! - test: check which tools are installed
//!
//! Any other subcommand name is captured as-is and rejected by the
//! command loader.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::CommandArgs;
use crate::tools::ToolFilter;

/// Toolbox - install, list and test developer tools
#[derive(Parser, Debug)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path(s) to the list of tools. Can also be set with TOOLBOX_JSON environment variable.
    /// Defaults to the files in `resources/` beside the executable, or in the source tree it
    /// was built from.
    #[arg(long = "tools", value_name = "PATH", global = true)]
    pub tools: Vec<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Tag selection shared by all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only use tools with this tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Skip tools with this tag (repeatable)
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,
}

impl From<FilterArgs> for ToolFilter {
    fn from(args: FilterArgs) -> Self {
        ToolFilter::new(args.tags, args.exclude_tags)
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install tools
    Install {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the install commands without running them
        #[arg(long)]
        dry_run: bool,

        /// Directory tools get installed into
        #[arg(long, value_name = "DIR", env = "TOOLBOX_TARGET_DIR")]
        target_dir: Option<PathBuf>,
    },

    /// List available tools
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Test if tools are installed
    Test {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the test commands without running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Anything else, resolved by the command loader
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Commands {
    /// Name used to look the command up
    pub fn name(&self) -> &str {
        match self {
            Commands::Install { .. } => "install",
            Commands::List { .. } => "list",
            Commands::Test { .. } => "test",
            Commands::External(args) => args.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Convert parsed arguments into constructor arguments
    pub fn into_args(self, verbose: bool) -> CommandArgs {
        let mut args = CommandArgs {
            verbose,
            ..Default::default()
        };
        match self {
            Commands::Install {
                filter,
                dry_run,
                target_dir,
            } => {
                args.filter = filter.into();
                args.dry_run = dry_run;
                args.target_dir = target_dir;
            }
            Commands::List { filter } => {
                args.filter = filter.into();
            }
            Commands::Test { filter, dry_run } => {
                args.filter = filter.into();
                args.dry_run = dry_run;
            }
            Commands::External(_) => {}
        }
        args
    }
}
