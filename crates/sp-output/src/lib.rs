//! `sp-output` — simulation output writers for the store_planner engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | CSV         | `interactions.csv`, `frame_summaries.csv`      |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sp_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_frames(600, 1.0 / 60.0, &mut obs);
//! sim.finish(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{FrameSummaryRow, InteractionRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
