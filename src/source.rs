//! Static dataset loading.
//!
//! The dataset is read once, either from a JSON file on disk (optionally
//! gzip-compressed) or from an in-memory document. Nothing is written back.

use crate::config;
use crate::error::{ActivityStatsError, Result};
use crate::models::{ActivityDataset, TransactionRecord};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Where the transaction records come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// A `.json` file, or a `.gz` file holding one.
    File(PathBuf),
    /// A JSON document held in memory.
    Json(String),
    /// Records that have already been materialized.
    Records(Vec<TransactionRecord>),
}

impl DataSource {
    /// Load every record from the source, in document order.
    pub fn load(&self) -> Result<Vec<TransactionRecord>> {
        match self {
            DataSource::File(path) => Ok(load_dataset_file(path)?.activity_summary),
            DataSource::Json(text) => Ok(parse_dataset(text)?.activity_summary),
            DataSource::Records(records) => Ok(records.clone()),
        }
    }
}

/// Parse a dataset document.
///
/// The document must be an object with an `activity_summary` array; other
/// top-level keys are ignored.
pub fn parse_dataset(text: &str) -> Result<ActivityDataset> {
    let dataset: ActivityDataset = serde_json::from_str(text)?;
    log::debug!(
        "parsed {} records from {}",
        dataset.activity_summary.len(),
        config::DATASET_KEY
    );
    Ok(dataset)
}

/// Read and parse a dataset file (handles `.gz` transparently).
pub fn load_dataset_file(path: &Path) -> Result<ActivityDataset> {
    if !path.exists() {
        return Err(ActivityStatsError::NotFound(format!(
            "Dataset file {} does not exist",
            path.display()
        )));
    }

    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        log::debug!("decompressing dataset {}", path.display());
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };

    parse_dataset(&contents)
        .inspect_err(|e| log::warn!("failed to parse dataset {}: {}", path.display(), e))
}
