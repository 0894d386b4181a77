//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use rh_core::SimTime;
use rh_model::LogisticsModel;
use rh_sim::{SimObserver, TraceRecord};

use crate::row::{TraceRow, productivity_rows, queue_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the event trace while the run progresses
/// and the productivity series and queue records when it ends, to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Skip per-event trace rows (productivity and queue rows are still
    /// written at the end of the run).
    trace:      bool,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, trace: true, last_error: None }
    }

    /// Disable or re-enable per-event trace rows.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
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
    fn on_event(&mut self, record: &TraceRecord) {
        if !self.trace {
            return;
        }
        let result = self.writer.write_trace(&[TraceRow::from(record)]);
        self.store_err(result);
    }

    fn on_run_end(&mut self, _final_time: SimTime, model: &LogisticsModel) {
        let result = self.writer.write_productivity(&productivity_rows(model));
        self.store_err(result);
        let result = self.writer.write_queue(&queue_rows(model));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
