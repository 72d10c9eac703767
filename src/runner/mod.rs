//! Step execution.
//!
//! - [`StepRunner`] - Runs a [`Run`](crate::steps::Run) in order, once per step
//! - [`StepScope`] - Pairs each begin notification with its end
//! - [`CommandInvoker`] - How a step's command is executed
//! - [`RunReport`] - Per-step outcomes and the process exit code

pub mod invoker;
pub mod scope;
pub mod sequential;

pub use invoker::{CommandInvoker, DryRunInvoker, ProcessInvoker};
pub use scope::StepScope;
pub use sequential::{RunReport, RunStatus, StepOutcome, StepRunner};
