//! steprun - Run a project's build steps in order and report every failure.
//!
//! steprun executes an ordered list of named commands (lint, build, tests,
//! type check), brackets each one with begin/end markers, keeps going when a
//! step fails, and exits non-zero at the end if anything failed. Under
//! GitHub Actions the markers become collapsible log groups.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Environment signals, steps files, and run settings
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Sequential step execution and failure aggregation
//! - [`shell`] - Child process execution and shell quoting
//! - [`steps`] - Step definitions, the built-in registry, and filtering
//! - [`ui`] - Step notifications and their text rendering
//!
//! # Example
//!
//! ```
//! use steprun::runner::StepRunner;
//! use steprun::shell::CommandResult;
//! use steprun::steps::{IncludeAll, Run, Step, StepRegistry};
//! use steprun::ui::MockNotifier;
//! use std::time::Duration;
//!
//! let registry = StepRegistry::from_steps(vec![
//!     Step::new("Build", ["make"]),
//!     Step::new("Test", ["make", "test"]),
//! ]);
//! let run = Run::from_registry(&registry, &IncludeAll);
//!
//! let mut notifier = MockNotifier::new();
//! let mut invoker = |step: &Step| -> steprun::Result<CommandResult> {
//!     let exit_code = if step.name() == "Build" { 2 } else { 0 };
//!     Ok(CommandResult { exit_code, output: String::new(), duration: Duration::ZERO })
//! };
//!
//! let report = StepRunner::new(&mut notifier, &mut invoker).run(&run).unwrap();
//! assert_eq!(report.exit_code(), 1);
//! assert_eq!(notifier.begun(), vec!["Build", "Test"]);
//! assert_eq!(notifier.failures(), vec!["Build"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{Result, SteprunError};
