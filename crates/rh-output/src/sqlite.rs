//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trace`, `productivity` and `queue`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, ProductivityRow, QueueRow, TraceRow};

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trace (
                 time     REAL    NOT NULL,
                 train_id INTEGER NOT NULL,
                 class    INTEGER NOT NULL,
                 phase    TEXT    NOT NULL,
                 port     INTEGER NOT NULL,
                 terminal INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS productivity (
                 time            REAL NOT NULL,
                 cumulative_mass REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS queue (
                 kind       TEXT    NOT NULL,
                 location   INTEGER NOT NULL,
                 train_id   INTEGER NOT NULL,
                 arrival    REAL    NOT NULL,
                 start      REAL    NOT NULL,
                 completion REAL    NOT NULL,
                 wait       REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trace(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trace (time, train_id, class, phase, port, terminal) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time,
                    row.train_id,
                    row.class,
                    row.phase,
                    row.port,
                    row.terminal,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_productivity(&mut self, rows: &[ProductivityRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO productivity (time, cumulative_mass) VALUES (?1, ?2)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.time, row.cumulative_mass])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_queue(&mut self, rows: &[QueueRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO queue (kind, location, train_id, arrival, start, completion, wait) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.kind.as_str(),
                    row.location,
                    row.train_id,
                    row.arrival,
                    row.start,
                    row.completion,
                    row.wait,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
