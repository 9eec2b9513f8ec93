//! Shared test fixtures for the activity-stats integration tests.
//!
//! Provides the sample dataset used across test files, as records, as a JSON
//! document, and written to a temporary directory (plain or gzip-compressed).

use activity_stats::TransactionRecord;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::PathBuf;

/// Three records: two deposits (BTC, ETH) and one withdrawal (BTC).
pub fn sample_records() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("deposit", 2, "USD", "100.50", "BTC", 0.01),
        TransactionRecord::new("deposit", 1, "USD", "50", "ETH", 0.5),
        TransactionRecord::new("withdrawal", 1, "USD", "20", "BTC", 0.002),
    ]
}

/// The sample records as a dataset document, with mixed string/number amounts.
pub fn sample_dataset() -> serde_json::Value {
    serde_json::json!({
        "activity_summary": [
            {
                "type": "deposit",
                "count": 2,
                "fiat_currency": "USD",
                "amount_fiat": "100.50",
                "crypto_currency": "BTC",
                "amount_crypto": 0.01
            },
            {
                "type": "deposit",
                "count": 1,
                "fiat_currency": "USD",
                "amount_fiat": 50,
                "crypto_currency": "ETH",
                "amount_crypto": 0.5
            },
            {
                "type": "withdrawal",
                "count": 1,
                "fiat_currency": "USD",
                "amount_fiat": "20",
                "crypto_currency": "BTC",
                "amount_crypto": 0.002
            }
        ]
    })
}

/// A larger dataset with several types, repeated cryptos and a trade in EUR.
pub fn mixed_records() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("trade", 4, "EUR", "1200", "BTC", 0.03),
        TransactionRecord::new("deposit", 1, "USD", "10.25", "USDC", 10.25),
        TransactionRecord::new("trade", 2, "EUR", "300.10", "SOL", 2.0),
        TransactionRecord::new("withdrawal", 0, "USD", "0", "ETH", 0.0),
        TransactionRecord::new("trade", 1, "EUR", 45.5, "BTC", 0.001),
        TransactionRecord::new("deposit", 3, "USD", "89.75", "USDC", 89.75),
        TransactionRecord::new("trade", 1, "EUR", "4.4", "ADA", 10.0),
    ]
}

/// Write `value` to `{dir}/{name}` and return the path.
pub fn write_dataset(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path
}

/// Write `value` gzip-compressed to `{dir}/{name}` and return the path.
pub fn write_gz_dataset(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(serde_json::to_string(value).unwrap().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
    path
}

/// Assert two floats are equal within a small tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
