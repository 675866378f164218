//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sp_core::Frame;
use sp_sim::{FrameReport, InteractionEvent, SimObserver};

use crate::row::{FrameSummaryRow, InteractionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes interaction events and frame summaries to
/// any [`OutputWriter`] backend (CSV, SQLite).
///
/// Interactions are buffered for the current frame and written as one batch
/// when the frame ends.  Errors from the writer are stored internally
/// because `SimObserver` methods have no return value; check them with
/// [`take_error`][Self::take_error] after the run.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<InteractionRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write anything still buffered and close the writer.  Safe to call
    /// more than once, and after `on_sim_end`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_interactions(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_interaction(&mut self, event: &InteractionEvent) {
        self.pending.push(InteractionRow::from(event));
    }

    fn on_frame_end(&mut self, report: &FrameReport) {
        self.flush_pending();
        let result = self.writer.write_frame_summary(&FrameSummaryRow::from(report));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_frame: Frame) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}
