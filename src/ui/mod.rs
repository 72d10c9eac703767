//! Progress reporting around step execution.
//!
//! This module provides:
//! - [`Notifier`] trait, the seam between the runner and the terminal
//! - [`ConsoleNotifier`] writing plain or CI-grouped markers
//! - [`MockNotifier`] recording notifications for tests
//! - [`presentation`] with the pure marker templates
//!
//! # Example
//!
//! ```
//! use steprun::steps::Step;
//! use steprun::ui::{ConsoleNotifier, Notifier};
//!
//! let step = Step::new("Build", ["make"]);
//! let mut notifier = ConsoleNotifier::new(Vec::new(), || true);
//! notifier.begin(&step);
//! notifier.end(&step);
//!
//! let out = String::from_utf8(notifier.into_inner()).unwrap();
//! assert!(out.contains("::group::Build"));
//! assert!(out.contains("::endgroup::"));
//! ```

pub mod console;
pub mod mock;
pub mod presentation;

pub use console::ConsoleNotifier;
pub use mock::{MockNotifier, Notification};
pub use presentation::{NotificationKind, PresentationMode, SUCCESS_BANNER};

use crate::steps::Step;

/// Receives step lifecycle events from the runner.
///
/// Implementations must not fail: `end` is called while unwinding out of an
/// errored step and has nowhere to report an error to.
pub trait Notifier {
    /// A step is about to run.
    fn begin(&mut self, step: &Step);

    /// A step exited non-zero.
    fn failure(&mut self, step: &Step);

    /// A step finished, successfully or not.
    fn end(&mut self, step: &Step);

    /// Every step in the run passed.
    fn success(&mut self);
}
