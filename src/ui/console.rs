//! Notifier that writes to a terminal or log stream.

use std::io::Write;

use crate::steps::Step;

use super::presentation::{render, render_success, NotificationKind, PresentationMode};
use super::Notifier;

/// Writes notifications as text and flushes after each one.
///
/// The CI probe is called for every notification, so the marker style always
/// reflects the probe's current answer.
pub struct ConsoleNotifier<W: Write> {
    out: W,
    ci_probe: Box<dyn Fn() -> bool>,
}

impl<W: Write> ConsoleNotifier<W> {
    /// Create a notifier over any writer with an explicit CI probe.
    pub fn new(out: W, ci_probe: impl Fn() -> bool + 'static) -> Self {
        Self {
            out,
            ci_probe: Box::new(ci_probe),
        }
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the notifier, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn mode(&self) -> PresentationMode {
        PresentationMode::from_ci((self.ci_probe)())
    }

    fn emit(&mut self, text: &str) {
        // Child processes share the stream; flush so their output lands
        // between our markers.
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    fn notify(&mut self, kind: NotificationKind, step: &Step) {
        let text = render(self.mode(), kind, step);
        self.emit(&text);
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn begin(&mut self, step: &Step) {
        self.notify(NotificationKind::Begin, step);
    }

    fn failure(&mut self, step: &Step) {
        self.notify(NotificationKind::Failure, step);
    }

    fn end(&mut self, step: &Step) {
        self.notify(NotificationKind::End, step);
    }

    fn success(&mut self) {
        self.emit(&render_success());
    }
}
