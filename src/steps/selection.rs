//! Choosing which registry steps make up a run.
//!
//! Filtering never touches the registry: a [`Run`] is a fresh list built by
//! asking a [`StepFilter`] about each step in declared order.

use serde::Serialize;

use super::registry::{StepRegistry, LINT_STEP};
use super::step::Step;

/// Verdict for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Include,
    Exclude,
}

/// Decides, per step, whether it belongs in a run.
pub trait StepFilter {
    fn select(&self, step: &Step) -> Selection;
}

impl<F> StepFilter for F
where
    F: Fn(&Step) -> Selection,
{
    fn select(&self, step: &Step) -> Selection {
        self(step)
    }
}

/// Includes every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAll;

impl StepFilter for IncludeAll {
    fn select(&self, _step: &Step) -> Selection {
        Selection::Include
    }
}

/// Drops the lint step when linting is disabled.
#[derive(Debug, Clone, Copy)]
pub struct LintFilter {
    lint_enabled: bool,
}

impl LintFilter {
    pub fn new(lint_enabled: bool) -> Self {
        Self { lint_enabled }
    }
}

impl StepFilter for LintFilter {
    fn select(&self, step: &Step) -> Selection {
        if !self.lint_enabled && step.name() == LINT_STEP {
            Selection::Exclude
        } else {
            Selection::Include
        }
    }
}

/// The ordered steps chosen for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Run {
    steps: Vec<Step>,
}

impl Run {
    /// Select steps from `registry`, keeping declared order.
    pub fn from_registry(registry: &StepRegistry, filter: &dyn StepFilter) -> Self {
        let steps = registry
            .steps()
            .iter()
            .filter(|step| match filter.select(step) {
                Selection::Include => true,
                Selection::Exclude => {
                    tracing::debug!("Excluding step '{}'", step.name());
                    false
                }
            })
            .cloned()
            .collect();

        Self { steps }
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
