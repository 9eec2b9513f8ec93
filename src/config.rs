use std::collections::HashMap;

/// Top-level key holding the record array in the dataset document.
pub const DATASET_KEY: &str = "activity_summary";

pub const VIEW_TITLE: &str = "Activity";
pub const VIEW_SUBTITLE: &str = "Transactions";
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Separator placed between an ISO code and the digits when a currency has
/// no en-US symbol (U+00A0 NO-BREAK SPACE).
pub const CODE_SEPARATOR: char = '\u{a0}';

/// en-US display data for one ISO 4217 currency.
///
/// Codes missing from [`currencies`] use [`DEFAULT_CURRENCY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySpec {
    pub symbol: Option<&'static str>,
    pub minor_units: u32,
}

const fn spec(symbol: Option<&'static str>, minor_units: u32) -> CurrencySpec {
    CurrencySpec {
        symbol,
        minor_units,
    }
}

/// No symbol (ISO code prefix) and two minor units.
pub const DEFAULT_CURRENCY: CurrencySpec = spec(None, 2);

/// Overrides for currencies with an en-US symbol or non-default minor units.
pub fn currencies() -> HashMap<&'static str, CurrencySpec> {
    HashMap::from([
        // Symbol currencies
        ("USD", spec(Some("$"), 2)),
        ("EUR", spec(Some("€"), 2)),
        ("GBP", spec(Some("£"), 2)),
        ("JPY", spec(Some("¥"), 0)),
        ("CAD", spec(Some("CA$"), 2)),
        ("AUD", spec(Some("A$"), 2)),
        ("NZD", spec(Some("NZ$"), 2)),
        ("HKD", spec(Some("HK$"), 2)),
        ("MXN", spec(Some("MX$"), 2)),
        ("BRL", spec(Some("R$"), 2)),
        ("INR", spec(Some("₹"), 2)),
        ("CNY", spec(Some("CN¥"), 2)),
        ("KRW", spec(Some("₩"), 0)),
        ("ILS", spec(Some("₪"), 2)),
        ("VND", spec(Some("₫"), 0)),
        ("TWD", spec(Some("NT$"), 2)),
        ("PHP", spec(Some("₱"), 2)),
        ("XCD", spec(Some("EC$"), 2)),
        // Code-only, zero-decimal
        ("CLP", spec(None, 0)),
        ("ISK", spec(None, 0)),
        ("PYG", spec(None, 0)),
        ("UGX", spec(None, 0)),
        // Code-only, three-decimal
        ("BHD", spec(None, 3)),
        ("KWD", spec(None, 3)),
        ("OMR", spec(None, 3)),
        ("JOD", spec(None, 3)),
        ("TND", spec(None, 3)),
    ])
}

/// Look up a currency by ISO code, ignoring ASCII case.
///
/// Any three-letter ASCII code is accepted; `None` means the code is
/// malformed.
pub fn currency(code: &str) -> Option<CurrencySpec> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let spec = currencies()
        .get(code.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_CURRENCY);
    Some(spec)
}
