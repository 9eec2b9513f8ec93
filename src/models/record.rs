use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FiatAmount — Fiat value as it appears on the wire (string or number)
// ---------------------------------------------------------------------------

/// A fiat amount that may arrive either as a JSON string (`"100.50"`) or as a
/// JSON number (`100.5`).
///
/// Conversion to a number is explicit: call [`to_f64()`](Self::to_f64).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FiatAmount {
    Number(f64),
    Text(String),
}

impl FiatAmount {
    /// Coerce to a finite `f64`.
    ///
    /// Text is trimmed and parsed as a base-10 decimal. Returns `None` for
    /// empty or unparsable text, and for any non-finite value (`NaN`,
    /// infinities, or decimals that overflow `f64`).
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            FiatAmount::Number(n) => *n,
            FiatAmount::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiatAmount::Number(n) => write!(f, "{}", n),
            FiatAmount::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FiatAmount {
    fn from(value: f64) -> Self {
        FiatAmount::Number(value)
    }
}

impl From<&str> for FiatAmount {
    fn from(value: &str) -> Self {
        FiatAmount::Text(value.to_string())
    }
}

impl From<String> for FiatAmount {
    fn from(value: String) -> Self {
        FiatAmount::Text(value)
    }
}

// ---------------------------------------------------------------------------
// TransactionRecord — One raw activity entry from the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub count: u64,
    pub fiat_currency: String,
    pub amount_fiat: FiatAmount,
    pub crypto_currency: String,
    #[serde(default)]
    pub amount_crypto: f64,
}

impl TransactionRecord {
    pub fn new(
        activity_type: impl Into<String>,
        count: u64,
        fiat_currency: impl Into<String>,
        amount_fiat: impl Into<FiatAmount>,
        crypto_currency: impl Into<String>,
        amount_crypto: f64,
    ) -> Self {
        Self {
            activity_type: activity_type.into(),
            count,
            fiat_currency: fiat_currency.into(),
            amount_fiat: amount_fiat.into(),
            crypto_currency: crypto_currency.into(),
            amount_crypto,
        }
    }
}

// ---------------------------------------------------------------------------
// ActivityDataset — Top-level dataset document
// ---------------------------------------------------------------------------

/// The static dataset: `{ "activity_summary": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDataset {
    pub activity_summary: Vec<TransactionRecord>,
}
