//! Async wrapper around [`ActivityStats`] for use in async runtimes (Tokio, etc.).
//!
//! Loading and aggregation run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while a
//! dataset file is read and parsed.
//!
//! # Example
//!
//! ```no_run
//! use activity_stats::AsyncActivityStats;
//!
//! #[tokio::main]
//! async fn main() {
//!     let stats = AsyncActivityStats::builder()
//!         .path("api-data.json")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let json = stats.run(|s| s.to_json()).await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use crate::error::{ActivityStatsError, Result};
use crate::models::TransactionRecord;
use crate::presenter::ActivityRow;
use crate::source::DataSource;
use crate::{ActivityStats, ActivityStatsBuilder, SummaryMap};

// ---------------------------------------------------------------------------
// AsyncActivityStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncActivityStats`] instance.
#[derive(Default)]
pub struct AsyncActivityStatsBuilder {
    inner: ActivityStatsBuilder,
}

impl AsyncActivityStatsBuilder {
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.path(path);
        self
    }

    pub fn json(mut self, text: impl Into<String>) -> Self {
        self.inner = self.inner.json(text);
        self
    }

    pub fn records(mut self, records: Vec<TransactionRecord>) -> Self {
        self.inner = self.inner.records(records);
        self
    }

    pub fn source(mut self, source: DataSource) -> Self {
        self.inner = self.inner.source(source);
        self
    }

    /// Load and aggregate on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncActivityStats> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let stats = builder.build()?;
            Ok(AsyncActivityStats {
                inner: Arc::new(stats),
            })
        })
        .await
        .map_err(|e| ActivityStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncActivityStats
// ---------------------------------------------------------------------------

/// Async wrapper around [`ActivityStats`].
///
/// The wrapped stats are immutable once built, so they are shared behind an
/// [`Arc`] without a lock and the wrapper is cheap to clone.
#[derive(Clone)]
pub struct AsyncActivityStats {
    inner: Arc<ActivityStats>,
}

impl AsyncActivityStats {
    pub fn builder() -> AsyncActivityStatsBuilder {
        AsyncActivityStatsBuilder::default()
    }

    /// Run a sync operation against the stats on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ActivityStats) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let stats = self.inner.clone();
        tokio::task::spawn_blocking(move || f(stats.as_ref()))
            .await
            .map_err(|e| ActivityStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub fn stats(&self) -> &ActivityStats {
        &self.inner
    }

    pub fn summaries(&self) -> &SummaryMap {
        self.inner.summaries()
    }

    pub fn rows(&self) -> &[ActivityRow] {
        self.inner.rows()
    }
}
