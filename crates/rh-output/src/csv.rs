//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trace.csv`
//! - `productivity.csv`
//! - `queue.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ProductivityRow, QueueRow, TraceRow};

/// Writes run output to three CSV files.
pub struct CsvWriter {
    trace:        Writer<File>,
    productivity: Writer<File>,
    queue:        Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["time", "train_id", "class", "phase", "port", "terminal"])?;

        let mut productivity = Writer::from_path(dir.join("productivity.csv"))?;
        productivity.write_record(["time", "cumulative_mass"])?;

        let mut queue = Writer::from_path(dir.join("queue.csv"))?;
        queue.write_record([
            "kind", "location", "train_id", "arrival", "start", "completion", "wait",
        ])?;

        Ok(Self {
            trace,
            productivity,
            queue,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.time.to_string(),
                row.train_id.to_string(),
                row.class.to_string(),
                row.phase.to_string(),
                row.port.to_string(),
                row.terminal.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_productivity(&mut self, rows: &[ProductivityRow]) -> OutputResult<()> {
        for row in rows {
            self.productivity.write_record(&[
                row.time.to_string(),
                row.cumulative_mass.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_queue(&mut self, rows: &[QueueRow]) -> OutputResult<()> {
        for row in rows {
            self.queue.write_record(&[
                row.kind.as_str().to_string(),
                row.location.to_string(),
                row.train_id.to_string(),
                row.arrival.to_string(),
                row.start.to_string(),
                row.completion.to_string(),
                row.wait.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.productivity.flush()?;
        self.queue.flush()?;
        Ok(())
    }
}
