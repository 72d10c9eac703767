//! Notification templates.
//!
//! Rendering is a pure function of the presentation mode and the step. The
//! caller decides the mode; nothing here reads the environment.

use crate::steps::Step;

/// Final line printed when every step passed.
pub const SUCCESS_BANNER: &str = "*** All build steps completed successfully! ***";

/// Which marker vocabulary to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// Plain `BEGIN_STEP` / `END_STEP` markers for local terminals.
    #[default]
    Plain,
    /// GitHub Actions workflow commands (`::group::` and friends).
    Ci,
}

impl PresentationMode {
    /// Pick the mode for a CI signal.
    pub fn from_ci(is_ci: bool) -> Self {
        if is_ci {
            PresentationMode::Ci
        } else {
            PresentationMode::Plain
        }
    }
}

/// The three per-step notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Begin,
    Failure,
    End,
}

/// The marker line for a notification.
pub fn marker(mode: PresentationMode, kind: NotificationKind, name: &str) -> String {
    match (mode, kind) {
        (PresentationMode::Plain, NotificationKind::Begin) => format!("BEGIN_STEP: {}", name),
        (PresentationMode::Ci, NotificationKind::Begin) => format!("::group::{}", name),
        (PresentationMode::Plain, NotificationKind::End) => format!("END_STEP: {}", name),
        (PresentationMode::Ci, NotificationKind::End) => "::endgroup::".to_string(),
        (PresentationMode::Plain, NotificationKind::Failure) => {
            format!(">>> STEP_FAILED: {}", name)
        }
        (PresentationMode::Ci, NotificationKind::Failure) => {
            format!("::error::STEP FAILED: {}", name)
        }
    }
}

/// The line announcing the exact command about to run.
pub fn command_line(step: &Step) -> String {
    format!("Command: {}", step.command_line())
}

/// Full text of a notification: blank line, marker, command line for
/// `Begin` only, blank line.
pub fn render(mode: PresentationMode, kind: NotificationKind, step: &Step) -> String {
    let mut text = String::from("\n");
    text.push_str(&marker(mode, kind, step.name()));
    text.push('\n');
    if kind == NotificationKind::Begin {
        text.push_str(&command_line(step));
        text.push('\n');
    }
    text.push('\n');
    text
}

/// Full text of the success banner.
pub fn render_success() -> String {
    format!("\n{}\n\n", SUCCESS_BANNER)
}
