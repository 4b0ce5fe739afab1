//! `ConsolePresenter<W>` — renders presentation changes as text lines.

use std::io::Write;

use hunt_config::Target;
use hunt_core::Tick;
use hunt_session::HuntObserver;
use hunt_tracker::{FoundReport, Hint, MarkerState};

use crate::{OutputError, OutputResult, text};

/// A [`HuntObserver`] that writes one line per presentation change to `W`.
///
/// Marker animations are only printed when `verbose` is set; the hint panel,
/// notifications and the fallback message are always printed.
///
/// Errors from the writer are stored internally because `HuntObserver`
/// methods have no return value.  After `session.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct ConsolePresenter<W: Write> {
    writer:     W,
    verbose:    bool,
    last_error: Option<OutputError>,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, verbose: false, last_error: None }
    }

    /// Also print every marker state change.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Take the stored write error (if any) after `session.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer in tests).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, line: &str) {
        let result = writeln!(self.writer, "{line}").map_err(OutputError::from);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::warn!("presenter write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> HuntObserver for ConsolePresenter<W> {
    fn on_session_start(&mut self, targets: &[Target]) {
        self.line(&format!("Hunt started: {} targets to find", targets.len()));
    }

    fn set_marker_state(&mut self, target: &Target, state: MarkerState) {
        if self.verbose {
            self.line(&format!("  [{}] {state}", target.id));
        }
    }

    fn report_nearest(&mut self, hint: &Hint, nearest: Option<&Target>) {
        self.line(&text::hint_line(hint, nearest));
    }

    fn report_found(&mut self, target: &Target, report: &FoundReport) {
        self.line(&text::found_line(target, report));
    }

    fn dismiss_found(&mut self, target: &Target) {
        if self.verbose {
            self.line(&format!("  [{}] notification dismissed", target.id));
        }
    }

    fn report_gps_unavailable(&mut self) {
        self.line(text::GPS_UNAVAILABLE);
    }

    fn on_session_end(&mut self, at: Tick) {
        self.line(&format!("Hunt ended at {at}"));
        let result = self.writer.flush().map_err(OutputError::from);
        self.store_err(result);
    }
}
