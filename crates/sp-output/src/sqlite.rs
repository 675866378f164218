//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `interactions` and `frame_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, InteractionRow, OutputResult};

/// Writes simulation output to an SQLite database.
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
             CREATE TABLE IF NOT EXISTS interactions (
                 frame       INTEGER NOT NULL,
                 clock       TEXT    NOT NULL,
                 hour        INTEGER NOT NULL,
                 customer_id TEXT    NOT NULL,
                 shelf_id    TEXT    NOT NULL,
                 shelf_count INTEGER
             );
             CREATE TABLE IF NOT EXISTS frame_summaries (
                 frame           INTEGER PRIMARY KEY,
                 clock_secs      INTEGER NOT NULL,
                 customers       INTEGER NOT NULL,
                 moved           INTEGER NOT NULL,
                 interactions    INTEGER NOT NULL,
                 removed         INTEGER NOT NULL,
                 imported        INTEGER,
                 import_failures INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_interactions(&mut self, rows: &[InteractionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO interactions \
                 (frame, clock, hour, customer_id, shelf_id, shelf_count) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.frame as i64,
                    row.clock,
                    row.hour,
                    row.customer_id,
                    row.shelf_id,
                    row.shelf_count.map(|n| n as i64),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO frame_summaries \
             (frame, clock_secs, customers, moved, interactions, removed, imported, import_failures) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.frame as i64,
                row.clock_secs,
                row.customers as i64,
                row.moved as i64,
                row.interactions as i64,
                row.removed as i64,
                row.imported.map(|n| n as i64),
                row.import_failures as i64,
            ],
        )?;
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
