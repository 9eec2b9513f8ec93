//! Folds transaction records into one summary per activity type.
//!
//! The fold is pure: it reads the input slice once, in order, and returns a
//! fresh [`SummaryMap`]. Any amount that cannot be coerced to a finite number
//! aborts the whole call.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::error::{ActivityStatsError, Result};
use crate::models::{CombinedSummary, CryptoCurrencies, TransactionRecord};

// ---------------------------------------------------------------------------
// SummaryMap
// ---------------------------------------------------------------------------

/// Activity type → [`CombinedSummary`], iterated in first-appearance order.
///
/// Built only by [`aggregate`]; there are no public mutators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryMap {
    entries: Vec<CombinedSummary>,
    index: HashMap<String, usize>,
}

impl SummaryMap {
    /// Look up the summary for an activity type.
    pub fn get(&self, activity_type: &str) -> Option<&CombinedSummary> {
        self.index.get(activity_type).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, activity_type: &str) -> bool {
        self.index.contains_key(activity_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(activity_type, summary)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CombinedSummary)> {
        self.entries
            .iter()
            .map(|s| (s.activity_type.as_str(), s))
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.activity_type.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &CombinedSummary> {
        self.entries.iter()
    }

    fn entry_mut(&mut self, activity_type: &str) -> Option<&mut CombinedSummary> {
        let i = *self.index.get(activity_type)?;
        Some(&mut self.entries[i])
    }

    fn push(&mut self, summary: CombinedSummary) {
        self.index
            .insert(summary.activity_type.clone(), self.entries.len());
        self.entries.push(summary);
    }
}

impl<'a> IntoIterator for &'a SummaryMap {
    type Item = &'a CombinedSummary;
    type IntoIter = std::slice::Iter<'a, CombinedSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for SummaryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

/// Group `records` by activity type.
///
/// For each type, the result holds the summed `count`, the summed coerced
/// `amount_fiat`, the `fiat_currency` of the first record seen, and every
/// distinct `crypto_currency` in first-seen order.
///
/// # Errors
///
/// [`ActivityStatsError::InvalidAmount`] for the first record whose
/// `amount_fiat` is not a finite decimal, or whose amount pushes its type's
/// running total past the `f64` range. No partial result is returned.
pub fn aggregate(records: &[TransactionRecord]) -> Result<SummaryMap> {
    let mut map = SummaryMap::default();

    for (i, record) in records.iter().enumerate() {
        let amount = record.amount_fiat.to_f64().ok_or_else(|| {
            ActivityStatsError::InvalidAmount {
                value: record.amount_fiat.to_string(),
                location: format!("record {} ({})", i, record.activity_type),
            }
        })?;

        match map.entry_mut(&record.activity_type) {
            Some(summary) => {
                let total = summary.amount_fiat + amount;
                if !total.is_finite() {
                    return Err(ActivityStatsError::InvalidAmount {
                        value: record.amount_fiat.to_string(),
                        location: format!(
                            "record {} ({}): running total overflows",
                            i, record.activity_type
                        ),
                    });
                }
                summary.amount_fiat = total;
                summary.count = summary.count.saturating_add(record.count);
                summary.crypto_currencies.insert(record.crypto_currency.as_str());
                if summary.fiat_currency != record.fiat_currency {
                    log::debug!(
                        "record {} ({}) has fiat currency {}, keeping first-seen {}",
                        i,
                        record.activity_type,
                        record.fiat_currency,
                        summary.fiat_currency
                    );
                }
            }
            None => map.push(CombinedSummary {
                activity_type: record.activity_type.clone(),
                count: record.count,
                fiat_currency: record.fiat_currency.clone(),
                amount_fiat: amount,
                crypto_currencies: CryptoCurrencies::singleton(record.crypto_currency.as_str()),
            }),
        }
    }

    log::debug!(
        "aggregated {} records into {} activity types",
        records.len(),
        map.len()
    );
    Ok(map)
}
