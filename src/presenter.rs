//! Display rows and the text view built from a [`SummaryMap`].
//!
//! Rendering never fails: a fiat total that cannot be formatted falls back to
//! a plain `"{amount:.2} {code}"` string and logs a warning.

use std::fmt;

use crate::aggregate::SummaryMap;
use crate::config;
use crate::error::Result;
use crate::format::format_currency;
use crate::models::{CombinedSummary, CryptoCurrencies};

// ---------------------------------------------------------------------------
// ActivityRow
// ---------------------------------------------------------------------------

/// One display row per activity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    /// `"Total {type}s"`.
    pub label: String,
    /// Formatted fiat total.
    pub total: String,
    /// Primary crypto symbol, with `" + N others"` when there are more.
    pub crypto: String,
    /// `"{count} Transaction"`, pluralized when `count > 1`.
    pub transactions: String,
}

impl ActivityRow {
    pub fn from_summary(summary: &CombinedSummary) -> Self {
        Self {
            label: format!("Total {}s", summary.activity_type),
            total: fiat_total(summary.amount_fiat, &summary.fiat_currency),
            crypto: crypto_indicator(&summary.crypto_currencies),
            transactions: transaction_count(summary.count),
        }
    }
}

impl fmt::Display for ActivityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.label, self.total, self.crypto, self.transactions
        )
    }
}

/// Build one row per summary, in map order.
pub fn render_rows(summaries: &SummaryMap) -> Vec<ActivityRow> {
    summaries.values().map(ActivityRow::from_summary).collect()
}

fn fiat_total(amount: f64, currency: &str) -> String {
    match format_currency(amount, currency) {
        Ok(s) => s,
        // Malformed codes, plus amounts a hand-built summary may carry that
        // `aggregate` never produces (non-finite, beyond `Decimal` range).
        Err(other) => {
            log::warn!("cannot format {} {}: {}, rendering raw amount", amount, currency, other);
            format!("{:.2} {}", amount, currency)
        }
    }
}

fn crypto_indicator(currencies: &CryptoCurrencies) -> String {
    let Some(first) = currencies.first() else {
        return String::new();
    };
    match currencies.len() {
        1 => first.to_string(),
        n => format!("{} + {} others", first, n - 1),
    }
}

fn transaction_count(count: u64) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{} Transaction{}", count, suffix)
}

// ---------------------------------------------------------------------------
// ActivityView
// ---------------------------------------------------------------------------

/// What the activity panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivityView {
    /// No summary map yet.
    #[default]
    Loading,
    Ready(Vec<ActivityRow>),
    Failed(String),
}

impl ActivityView {
    /// Map an aggregation outcome onto a view state.
    pub fn from_result(result: Result<SummaryMap>) -> Self {
        match result {
            Ok(summaries) => ActivityView::Ready(render_rows(&summaries)),
            Err(e) => ActivityView::Failed(e.to_string()),
        }
    }

    pub fn rows(&self) -> &[ActivityRow] {
        match self {
            ActivityView::Ready(rows) => rows,
            _ => &[],
        }
    }

    /// Render the panel as text: title, subtitle, then one line per row (or
    /// the loading/error placeholder).
    pub fn render(&self) -> String {
        let mut lines = vec![
            config::VIEW_TITLE.to_string(),
            config::VIEW_SUBTITLE.to_string(),
        ];
        match self {
            ActivityView::Loading => lines.push(config::LOADING_PLACEHOLDER.to_string()),
            ActivityView::Ready(rows) => lines.extend(rows.iter().map(ActivityRow::to_string)),
            ActivityView::Failed(message) => lines.push(format!("Error: {}", message)),
        }
        lines.join("\n")
    }
}

impl fmt::Display for ActivityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
