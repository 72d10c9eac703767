//! List command implementation.
//!
//! The `steprun list` command prints the steps a run would execute, after
//! the lint filter has been applied.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::shell::join;
use crate::steps::Run;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    /// The listing as text, one numbered line per step, or as JSON.
    pub fn render(&self, run: &Run) -> Result<String> {
        if self.args.json {
            let mut json = serde_json::to_string_pretty(run).map_err(anyhow::Error::from)?;
            json.push('\n');
            return Ok(json);
        }

        Ok(run
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}: {}\n", i + 1, step.name(), join(step.command())))
            .collect())
    }
}

impl Command for ListCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let settings = self.args.selection.settings(&self.project_root);
        let run = settings.build_run()?;

        out.write_all(self.render(&run)?.as_bytes())?;
        out.flush()?;
        Ok(CommandResult::success())
    }
}
