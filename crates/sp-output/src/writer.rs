//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FrameSummaryRow, InteractionRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective.  Errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of interaction events.
    fn write_interactions(&mut self, rows: &[InteractionRow]) -> OutputResult<()>;

    /// Write one frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
