//! Sequential step execution with deferred failure.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::steps::{Run, Step, StepStatus};
use crate::ui::Notifier;

use super::invoker::CommandInvoker;
use super::scope::StepScope;

/// What happened to one step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Step name.
    pub name: String,

    /// Exit code returned by the command.
    pub exit_code: i32,

    /// Captured output (empty when output was inherited).
    pub output: String,

    /// Execution duration.
    pub duration: Duration,

    /// Final status, `Succeeded` or `Failed`.
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn failed(&self) -> bool {
        self.status == StepStatus::Failed
    }
}

/// Overall state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    NotStarted,
    InProgress,
    AllPassed,
    SomeFailed,
}

impl RunStatus {
    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::AllPassed | RunStatus::SomeFailed)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// One outcome per step, in execution order.
    pub outcomes: Vec<StepOutcome>,

    /// Total duration.
    pub duration: Duration,
}

impl RunReport {
    /// Whether any step failed.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(StepOutcome::failed)
    }

    /// Steps that failed, in execution order.
    pub fn failures(&self) -> Vec<&StepOutcome> {
        self.outcomes.iter().filter(|o| o.failed()).collect()
    }

    pub fn status(&self) -> RunStatus {
        if self.has_failures() {
            RunStatus::SomeFailed
        } else {
            RunStatus::AllPassed
        }
    }

    /// Process exit code: 0 if every step passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}

/// Runs every step of a [`Run`] in order, once each.
///
/// A failing step never stops the run; failures are reported as they happen
/// and folded into the final [`RunReport`]. An invocation error (the command
/// could not be started) is returned immediately after the in-flight step's
/// end notification, and the remaining steps are not run.
pub struct StepRunner<'a> {
    notifier: &'a mut dyn Notifier,
    invoker: &'a mut dyn CommandInvoker,
    status: RunStatus,
}

impl<'a> StepRunner<'a> {
    /// Create a new runner.
    pub fn new(notifier: &'a mut dyn Notifier, invoker: &'a mut dyn CommandInvoker) -> Self {
        Self {
            notifier,
            invoker,
            status: RunStatus::NotStarted,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Execute `run` and return the aggregate result.
    ///
    /// Prints the success banner only when no step failed.
    pub fn run(&mut self, run: &Run) -> Result<RunReport> {
        debug_assert_eq!(self.status, RunStatus::NotStarted);
        let start = Instant::now();
        self.status = RunStatus::InProgress;
        info!("Running {} step(s): {}", run.len(), run.names().join(", "));

        let mut outcomes = Vec::with_capacity(run.len());
        for step in run.steps() {
            outcomes.push(self.run_step(step)?);
        }

        let report = RunReport {
            outcomes,
            duration: start.elapsed(),
        };
        self.status = report.status();

        if report.has_failures() {
            let names: Vec<_> = report.failures().iter().map(|o| o.name.as_str()).collect();
            warn!(
                "{} of {} step(s) failed: {}",
                names.len(),
                report.outcomes.len(),
                names.join(", ")
            );
        } else {
            self.notifier.success();
        }

        info!("Run finished in {:?}", report.duration);
        Ok(report)
    }

    fn run_step(&mut self, step: &Step) -> Result<StepOutcome> {
        debug!("Starting step '{}'", step.name());

        let mut scope = StepScope::begin(&mut *self.notifier, step);
        let result = self.invoker.invoke(step).inspect_err(|e| {
            warn!("Step '{}' could not be run: {}", step.name(), e);
        })?;
        let status = scope.finish(result.exit_code);
        drop(scope);

        debug!(
            "Step '{}' exited with code {} after {:?}",
            step.name(),
            result.exit_code,
            result.duration
        );

        Ok(StepOutcome {
            name: step.name().to_string(),
            exit_code: result.exit_code,
            output: result.output,
            duration: result.duration,
            status,
        })
    }
}
