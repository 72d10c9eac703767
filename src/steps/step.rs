//! The step record and its execution status.

use serde::{Deserialize, Serialize};

use crate::shell::quote::join;

/// A named command to run as one unit of a build.
///
/// Steps are immutable once built. `command` is a token list whose first
/// element is the executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    name: String,
    command: Vec<String>,
}

impl Step {
    /// Create a step from a display name and command tokens.
    pub fn new<I, S>(name: impl Into<String>, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            command: command.into_iter().map(Into::into).collect(),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executable followed by its arguments.
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// The command as a single shell-quoted string, for display only.
    pub fn command_line(&self) -> String {
        join(&self.command)
    }
}

/// Status of a step within a run.
///
/// A step moves `Pending -> Running -> (Succeeded | Failed)` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Step is waiting to run.
    Pending,

    /// Step is currently executing.
    Running,

    /// Command exited with code 0.
    Succeeded,

    /// Command exited with a non-zero code.
    Failed,
}

impl StepStatus {
    /// Status implied by an exit code.
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            StepStatus::Succeeded
        } else {
            StepStatus::Failed
        }
    }

    /// Check if this is a terminal state (no more changes expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Succeeded | StepStatus::Failed)
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Succeeded => "succeeded",
            StepStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_exposes_fields() {
        let step = Step::new("Build", ["python", "build_scripts/build.py"]);
        assert_eq!(step.name(), "Build");
        assert_eq!(step.command(), ["python", "build_scripts/build.py"]);
    }

    #[test]
    fn empty_command_renders_empty() {
        let step = Step::new("Nothing", Vec::<String>::new());
        assert!(step.command().is_empty());
        assert_eq!(step.command_line(), "");
    }

    #[test]
    fn command_line_is_shell_quoted() {
        let step = Step::new("Echo", ["echo", "hello world"]);
        assert_eq!(step.command_line(), "echo 'hello world'");
    }

    #[test]
    fn steps_compare_by_fields() {
        let a = Step::new("Lint", ["pylint"]);
        let b = Step::new("Lint".to_string(), vec!["pylint".to_string()]);
        assert_eq!(a, b);
        assert_ne!(a, Step::new("Lint", ["flake8"]));
    }

    #[test]
    fn status_from_exit_code() {
        assert_eq!(StepStatus::from_exit_code(0), StepStatus::Succeeded);
        assert_eq!(StepStatus::from_exit_code(1), StepStatus::Failed);
        assert_eq!(StepStatus::from_exit_code(-9), StepStatus::Failed);
    }

    #[test]
    fn status_is_terminal() {
        assert!(!StepStatus::Pending.is_terminal());
        assert!(!StepStatus::Running.is_terminal());
        assert!(StepStatus::Succeeded.is_terminal());
        assert!(StepStatus::Failed.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(StepStatus::Failed.to_string(), "failed");
        assert_eq!(StepStatus::Succeeded.to_string(), "succeeded");
    }
}
