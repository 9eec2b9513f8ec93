use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CryptoCurrencies — Insertion-ordered set of crypto symbols
// ---------------------------------------------------------------------------

/// Distinct crypto denominations in first-seen order.
///
/// Sets in this domain hold a handful of symbols, so membership is a linear
/// scan over the backing `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CryptoCurrencies(Vec<String>);

impl CryptoCurrencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly `symbol`.
    pub fn singleton(symbol: impl Into<String>) -> Self {
        Self(vec![symbol.into()])
    }

    /// Add `symbol` if absent. Returns `true` if it was inserted.
    ///
    /// Existing members keep their position.
    pub fn insert(&mut self, symbol: impl Into<String>) -> bool {
        let symbol = symbol.into();
        if self.contains(&symbol) {
            return false;
        }
        self.0.push(symbol);
        true
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.iter().any(|s| s == symbol)
    }

    /// The first-inserted symbol, reported as the primary denomination.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CryptoCurrencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// CombinedSummary — Aggregated totals for one activity type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedSummary {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub count: u64,
    pub fiat_currency: String,
    pub amount_fiat: f64,
    pub crypto_currencies: CryptoCurrencies,
}
