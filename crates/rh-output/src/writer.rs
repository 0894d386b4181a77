//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, ProductivityRow, QueueRow, TraceRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write a batch of trace rows.
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write the productivity series.
    fn write_productivity(&mut self, rows: &[ProductivityRow]) -> OutputResult<()>;

    /// Write realized queue entries.
    fn write_queue(&mut self, rows: &[QueueRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
