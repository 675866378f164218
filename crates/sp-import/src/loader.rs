//! Reading a saved simulation batch.
//!
//! The file format is the backend's response JSON, unchanged, so a batch
//! captured from a live run can be replayed offline.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{ImportResult, SimulationResponse};

/// Load a simulation response from a JSON file.
pub fn load_batch_json(path: &Path) -> ImportResult<SimulationResponse> {
    let file = File::open(path)?;
    load_batch_reader(BufReader::new(file))
}

/// Like [`load_batch_json`] but accepts any `Read` source.
pub fn load_batch_reader<R: Read>(reader: R) -> ImportResult<SimulationResponse> {
    Ok(serde_json::from_reader(reader)?)
}
