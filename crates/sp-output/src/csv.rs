//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `interactions.csv`
//! - `frame_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, InteractionRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    interactions: Writer<File>,
    summaries:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut interactions = Writer::from_path(dir.join("interactions.csv"))?;
        interactions.write_record(["frame", "clock", "hour", "customer_id", "shelf_id", "shelf_count"])?;

        let mut summaries = Writer::from_path(dir.join("frame_summaries.csv"))?;
        summaries.write_record([
            "frame",
            "clock_secs",
            "customers",
            "moved",
            "interactions",
            "removed",
            "imported",
            "import_failures",
        ])?;

        Ok(Self {
            interactions,
            summaries,
            finished: false,
        })
    }
}

/// Empty cell for `None`.
fn opt(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_interactions(&mut self, rows: &[InteractionRow]) -> OutputResult<()> {
        for row in rows {
            self.interactions.write_record(&[
                row.frame.to_string(),
                row.clock.clone(),
                row.hour.to_string(),
                row.customer_id.clone(),
                row.shelf_id.clone(),
                opt(row.shelf_count),
            ])?;
        }
        Ok(())
    }

    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.clock_secs.to_string(),
            row.customers.to_string(),
            row.moved.to_string(),
            row.interactions.to_string(),
            row.removed.to_string(),
            opt(row.imported),
            row.import_failures.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.interactions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
