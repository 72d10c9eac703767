//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Result for a process-style exit code.
    pub fn from_exit_code(exit_code: u8) -> Self {
        if exit_code == 0 {
            Self::success()
        } else {
            Self::failure(exit_code)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// No subcommand means `run` with default arguments.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.project_root, args.clone());
                cmd.execute(out)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(&self.project_root, args.clone());
                cmd.execute(out)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
            None => {
                let cmd = super::run::RunCommand::new(&self.project_root, RunArgs::default());
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_exit_code() {
        assert_eq!(CommandResult::from_exit_code(0), CommandResult::success());
        assert_eq!(CommandResult::from_exit_code(1), CommandResult::failure(1));
    }

    #[test]
    fn dispatcher_keeps_project_root() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/repo"));
        assert_eq!(dispatcher.project_root(), Path::new("/repo"));
    }

    #[test]
    fn dispatches_completions() {
        let cli = Cli::parse_from(["steprun", "completions", "bash"]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/repo"));
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();
        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("steprun"));
    }

    #[test]
    fn dispatches_list() {
        let cli = Cli::parse_from(["steprun", "list", "--no-lint"]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/repo"));
        let mut out = Vec::new();

        let result = dispatcher.dispatch(&cli, &mut out).unwrap();
        assert!(result.success);
        let listing = String::from_utf8(out).unwrap();
        assert!(listing.starts_with("1. Build: "));
        assert!(!listing.contains("Lint"));
    }
}
