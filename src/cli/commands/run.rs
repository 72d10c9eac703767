//! Run command implementation.
//!
//! The `steprun run` command executes every selected step in order and
//! exits non-zero if any of them failed.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{is_ci_host, RunSettings};
use crate::error::Result;
use crate::runner::{CommandInvoker, DryRunInvoker, ProcessInvoker, RunReport, StepRunner};
use crate::ui::{ConsoleNotifier, Notifier};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
    ci_probe: fn() -> bool,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            ci_probe: is_ci_host,
        }
    }

    /// Replace the CI host probe used for marker style.
    pub fn with_ci_probe(mut self, probe: fn() -> bool) -> Self {
        self.ci_probe = probe;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Resolve flags and environment into settings.
    pub fn settings(&self) -> RunSettings {
        let mut settings = self.args.selection.settings(&self.project_root);
        settings.dry_run = self.args.dry_run;
        settings.capture_output = self.args.capture;
        settings
    }

    /// Run the steps selected by `settings` with explicit collaborators.
    pub fn execute_with(
        settings: &RunSettings,
        notifier: &mut dyn Notifier,
        invoker: &mut dyn CommandInvoker,
    ) -> Result<RunReport> {
        let run = settings.build_run()?;
        tracing::debug!("Running {} step(s): {:?}", run.len(), run.names());
        StepRunner::new(notifier, invoker).run(&run)
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let settings = self.settings();
        let mut notifier = ConsoleNotifier::new(out, self.ci_probe);

        let report = if settings.dry_run {
            Self::execute_with(&settings, &mut notifier, &mut DryRunInvoker)?
        } else {
            let mut invoker = ProcessInvoker::from_settings(&settings);
            Self::execute_with(&settings, &mut notifier, &mut invoker)?
        };

        tracing::info!(
            "Finished {} step(s) in {:.1}s",
            report.outcomes.len(),
            report.duration.as_secs_f64()
        );
        Ok(CommandResult::from_exit_code(report.exit_code()))
    }
}
