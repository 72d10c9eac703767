//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use crate::config::RunSettings;

/// steprun - Run the build steps in order and report every failure.
#[derive(Debug, Parser)]
#[command(name = "steprun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every step in order (default if no command specified)
    Run(RunArgs),

    /// List the steps a run would execute
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options that decide which steps make up a run.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SelectionArgs {
    /// YAML file with the steps to run (replaces the built-in steps)
    #[arg(long, value_name = "FILE")]
    pub steps: Option<PathBuf>,

    /// Directory holding the build scripts
    #[arg(long, value_name = "DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Skip the Lint step (same as LINT=false)
    #[arg(long)]
    pub no_lint: bool,
}

impl SelectionArgs {
    /// Settings from the environment, with these flags applied on top.
    pub fn settings(&self, project_root: &Path) -> RunSettings {
        let mut settings = RunSettings::from_env(project_root);
        self.apply(&mut settings);
        settings
    }

    /// Apply flags to already resolved settings.
    pub fn apply(&self, settings: &mut RunSettings) {
        if self.no_lint {
            settings.lint_enabled = false;
        }
        if let Some(dir) = &self.scripts_dir {
            settings.scripts_dir = dir.clone();
        }
        if let Some(path) = &self.steps {
            settings.steps_file = Some(path.clone());
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Show each step without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Capture step output instead of streaming it
    #[arg(long)]
    pub capture: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
