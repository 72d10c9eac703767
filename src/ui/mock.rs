//! Mock notifier for testing.
//!
//! `MockNotifier` implements [`Notifier`] and records every notification in
//! order for later assertion.
//!
//! # Example
//!
//! ```
//! use steprun::steps::Step;
//! use steprun::ui::{MockNotifier, Notification, Notifier};
//!
//! let step = Step::new("Build", ["make"]);
//! let mut notifier = MockNotifier::new();
//! notifier.begin(&step);
//! notifier.end(&step);
//!
//! assert_eq!(
//!     notifier.events(),
//!     [Notification::begin("Build"), Notification::end("Build")]
//! );
//! assert!(!notifier.succeeded());
//! ```

use crate::steps::Step;

use super::Notifier;

/// A recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Step started, with its rendered command line.
    Begin { name: String, command: String },
    /// Step exited non-zero.
    Failure { name: String },
    /// Step finished.
    End { name: String },
    /// Success banner.
    Success,
}

impl Notification {
    /// A `Begin` for `name`, ignoring the command when compared via [`Notification::same_as`].
    pub fn begin(name: &str) -> Self {
        Notification::Begin {
            name: name.to_string(),
            command: String::new(),
        }
    }

    pub fn failure(name: &str) -> Self {
        Notification::Failure {
            name: name.to_string(),
        }
    }

    pub fn end(name: &str) -> Self {
        Notification::End {
            name: name.to_string(),
        }
    }

    /// Compare kind and step name only.
    pub fn same_as(&self, other: &Notification) -> bool {
        match (self, other) {
            (Notification::Begin { name: a, .. }, Notification::Begin { name: b, .. }) => a == b,
            (Notification::Failure { name: a }, Notification::Failure { name: b }) => a == b,
            (Notification::End { name: a }, Notification::End { name: b }) => a == b,
            (Notification::Success, Notification::Success) => true,
            _ => false,
        }
    }
}

/// Notifier that records instead of printing.
#[derive(Debug, Default)]
pub struct MockNotifier {
    events: Vec<Notification>,
    record_commands: bool,
}

impl MockNotifier {
    /// Create a mock that records step names only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that also records each step's rendered command line.
    pub fn with_commands() -> Self {
        Self {
            record_commands: true,
            ..Default::default()
        }
    }

    /// All notifications, in emission order.
    pub fn events(&self) -> &[Notification] {
        &self.events
    }

    /// Check the recorded sequence against `expected`, comparing kind and name.
    pub fn matches(&self, expected: &[Notification]) -> bool {
        self.events.len() == expected.len()
            && self
                .events
                .iter()
                .zip(expected)
                .all(|(actual, want)| actual.same_as(want))
    }

    /// Names of steps that got a begin notification.
    pub fn begun(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Notification::Begin { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Names of steps reported as failed.
    pub fn failures(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Notification::Failure { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Names of steps that got an end notification.
    pub fn ended(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Notification::End { name } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether the success banner was shown.
    pub fn succeeded(&self) -> bool {
        self.events.contains(&Notification::Success)
    }

    /// Clear all recorded notifications.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Notifier for MockNotifier {
    fn begin(&mut self, step: &Step) {
        let command = if self.record_commands {
            step.command_line()
        } else {
            String::new()
        };
        self.events.push(Notification::Begin {
            name: step.name().to_string(),
            command,
        });
    }

    fn failure(&mut self, step: &Step) {
        self.events.push(Notification::failure(step.name()));
    }

    fn end(&mut self, step: &Step) {
        self.events.push(Notification::end(step.name()));
    }

    fn success(&mut self) {
        self.events.push(Notification::Success);
    }
}
