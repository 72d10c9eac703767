//! Begin/end pairing for a single step.

use crate::steps::{Step, StepStatus};
use crate::ui::Notifier;

/// Emits `begin` on creation and `end` when dropped.
///
/// Dropping happens on every exit path, including `?` returning an
/// invocation error, so each begin is always matched by exactly one end.
pub struct StepScope<'n, 's> {
    notifier: &'n mut dyn Notifier,
    step: &'s Step,
    status: StepStatus,
}

impl<'n, 's> StepScope<'n, 's> {
    /// Announce `step` and mark it running.
    pub fn begin(notifier: &'n mut dyn Notifier, step: &'s Step) -> Self {
        notifier.begin(step);
        Self {
            notifier,
            step,
            status: StepStatus::Running,
        }
    }

    /// Record the exit code, reporting a failure if it is non-zero.
    pub fn finish(&mut self, exit_code: i32) -> StepStatus {
        debug_assert_eq!(self.status, StepStatus::Running);
        self.status = StepStatus::from_exit_code(exit_code);
        if self.status == StepStatus::Failed {
            self.notifier.failure(self.step);
        }
        self.status
    }

    pub fn status(&self) -> StepStatus {
        self.status
    }
}

impl Drop for StepScope<'_, '_> {
    fn drop(&mut self) {
        self.notifier.end(self.step);
    }
}
