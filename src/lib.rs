//! Activity summaries for Rust.
//!
//! Folds a static list of transaction records into one summary per activity
//! type (deposit, withdrawal, trade, ...) and renders a display row for each:
//! a `"Total {type}s"` label, the formatted fiat total, the crypto
//! denominations seen, and the transaction count.
//!
//! # Quick start
//!
//! ```no_run
//! use activity_stats::ActivityStats;
//!
//! let stats = ActivityStats::builder().path("api-data.json").build().unwrap();
//!
//! for row in stats.rows() {
//!     println!("{}", row);
//! }
//!
//! let deposits = stats.summaries().get("deposit");
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod presenter;
pub mod source;

pub use aggregate::{aggregate, SummaryMap};
#[cfg(feature = "async")]
pub use async_client::AsyncActivityStats;
pub use error::{ActivityStatsError, Result};
pub use format::format_currency;
pub use models::{CombinedSummary, CryptoCurrencies, FiatAmount, TransactionRecord};
pub use presenter::{ActivityRow, ActivityView};
pub use source::DataSource;

use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// ActivityStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`ActivityStats`] instance.
///
/// Exactly one data source is used; setting a new one replaces the previous.
#[derive(Default)]
pub struct ActivityStatsBuilder {
    source: Option<DataSource>,
}

impl ActivityStatsBuilder {
    /// Read records from a dataset file (`.json`, or gzip-compressed `.gz`).
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(DataSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Read records from an in-memory JSON document.
    pub fn json(mut self, text: impl Into<String>) -> Self {
        self.source = Some(DataSource::Json(text.into()));
        self
    }

    /// Use records that are already loaded.
    pub fn records(mut self, records: Vec<TransactionRecord>) -> Self {
        self.source = Some(DataSource::Records(records));
        self
    }

    pub fn source(mut self, source: DataSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Load the dataset and aggregate it.
    ///
    /// This is the only point at which data is read; the returned
    /// [`ActivityStats`] never changes afterwards.
    pub fn build(self) -> Result<ActivityStats> {
        let source = self.source.ok_or_else(|| {
            ActivityStatsError::InvalidArgument("no data source configured".into())
        })?;
        let records = source.load()?;
        let summaries = aggregate(&records)?;
        let rows = presenter::render_rows(&summaries);
        Ok(ActivityStats {
            record_count: records.len(),
            summaries,
            rows,
        })
    }
}

// ---------------------------------------------------------------------------
// ActivityStats
// ---------------------------------------------------------------------------

/// Aggregated activity for one dataset, with its display rows.
///
/// Created via [`ActivityStats::builder()`].
#[derive(Debug, Clone)]
pub struct ActivityStats {
    record_count: usize,
    summaries: SummaryMap,
    rows: Vec<ActivityRow>,
}

impl ActivityStats {
    pub fn builder() -> ActivityStatsBuilder {
        ActivityStatsBuilder::default()
    }

    /// Per-type summaries in first-appearance order.
    pub fn summaries(&self) -> &SummaryMap {
        &self.summaries
    }

    /// One display row per activity type, in the same order as
    /// [`summaries()`](Self::summaries).
    pub fn rows(&self) -> &[ActivityRow] {
        &self.rows
    }

    /// Number of input records that were aggregated.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn view(&self) -> ActivityView {
        ActivityView::Ready(self.rows.clone())
    }

    /// Render the activity panel as text.
    pub fn render(&self) -> String {
        self.view().render()
    }

    /// Serialize the summaries as a JSON array, in display order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summaries)?)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ActivityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<&str> = self.summaries.types().collect();
        write!(
            f,
            "ActivityStats(records={}, types=[{}])",
            self.record_count,
            types.join(", ")
        )
    }
}
