//! How a step's command actually gets run.

use std::time::Duration;

use crate::config::RunSettings;
use crate::error::{Result, SteprunError};
use crate::shell::{run_cmd, CommandOptions, CommandResult};
use crate::steps::Step;

/// Runs a step's command and reports its exit code.
///
/// A non-zero exit is an `Ok` result. `Err` means the command could not be
/// run at all, which aborts the whole run.
pub trait CommandInvoker {
    fn invoke(&mut self, step: &Step) -> Result<CommandResult>;
}

impl<F> CommandInvoker for F
where
    F: FnMut(&Step) -> Result<CommandResult>,
{
    fn invoke(&mut self, step: &Step) -> Result<CommandResult> {
        self(step)
    }
}

/// Spawns each step as a child process and waits for it.
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker {
    options: CommandOptions,
}

impl ProcessInvoker {
    pub fn new(options: CommandOptions) -> Self {
        Self { options }
    }

    /// Invoker running in the project root, capturing output if asked to.
    pub fn from_settings(settings: &RunSettings) -> Self {
        Self::new(CommandOptions {
            cwd: Some(settings.project_root.clone()),
            capture: settings.capture_output,
            ..Default::default()
        })
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }
}

impl CommandInvoker for ProcessInvoker {
    fn invoke(&mut self, step: &Step) -> Result<CommandResult> {
        if step.command().is_empty() {
            return Err(SteprunError::EmptyCommand {
                step: step.name().to_string(),
            });
        }

        let result = run_cmd(step.command(), &self.options)?;
        if !result.output.is_empty() {
            if result.success() {
                tracing::debug!("Output of '{}':\n{}", step.name(), result.output);
            } else {
                tracing::warn!(
                    "'{}' exited with code {}:\n{}",
                    step.name(),
                    result.exit_code,
                    result.output
                );
            }
        }
        Ok(result)
    }
}

/// Pretends every step succeeded without running anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunInvoker;

impl CommandInvoker for DryRunInvoker {
    fn invoke(&mut self, step: &Step) -> Result<CommandResult> {
        tracing::info!("[dry-run] would run: {}", step.command_line());
        Ok(CommandResult {
            exit_code: 0,
            output: String::new(),
            duration: Duration::ZERO,
        })
    }
}
