//! # Currency Reference Data
//!
//! The fixed set of currency codes the converter offers, plus display symbols
//! for the common ones.
//!
//! [`CurrencyCode`] can only be built from a member of [`SUPPORTED_CURRENCIES`],
//! so any value of that type is already a valid conversion endpoint.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supported ISO 4217 codes, alphabetical.
pub const SUPPORTED_CURRENCIES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL",
    "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHF", "CLP", "CNY",
    "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD", "EGP",
    "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD",
    "GNF", "GTQ", "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR",
    "IQD", "IRR", "ISK", "JMD", "JOD", "JPY", "KES", "KGS", "KHR", "KMF",
    "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD",
    "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD",
    "OMR", "PAB", "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON",
    "RSD", "RUB", "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP",
    "SLE", "SOS", "SRD", "SSP", "STN", "SYP", "SZL", "THB", "TJS", "TMT",
    "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU",
    "UZS", "VES", "VND", "VUV", "WST", "XAF", "XCD", "XOF", "XPF", "YER",
    "ZAR", "ZMW", "ZWL",
];

/// Display symbols for the codes that have a well-known glyph.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("RUB", "₽"),
    ("TRY", "₺"),
    ("BRL", "R$"),
    ("CHF", "Fr"),
    ("CAD", "C$"),
    ("AUD", "A$"),
    ("HKD", "HK$"),
    ("SGD", "S$"),
    ("NOK", "kr"),
    ("SEK", "kr"),
    ("DKK", "kr"),
    ("MXN", "MX$"),
    ("ZAR", "R"),
];

/// A currency code known to be in [`SUPPORTED_CURRENCIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// US dollar, the default base.
    pub const USD: CurrencyCode = CurrencyCode("USD");
    /// Euro, the default target.
    pub const EUR: CurrencyCode = CurrencyCode("EUR");

    /// Look up `code` in the supported set. Matching is exact (upper case).
    pub fn new(code: &str) -> Option<Self> {
        SUPPORTED_CURRENCIES
            .iter()
            .find(|supported| **supported == code)
            .map(|supported| CurrencyCode(*supported))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Display symbol, or the code itself when there is none.
    pub fn symbol(&self) -> &'static str {
        symbol_for(self.0)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Error for a code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedCurrency(pub String);

impl fmt::Display for UnsupportedCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported currency code: {}", self.0)
    }
}

impl std::error::Error for UnsupportedCurrency {}

impl FromStr for CurrencyCode {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::new(s).ok_or_else(|| UnsupportedCurrency(s.to_string()))
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// All supported codes, in display order.
pub fn list_supported_currencies() -> impl Iterator<Item = CurrencyCode> {
    SUPPORTED_CURRENCIES.iter().map(|code| CurrencyCode(*code))
}

/// Display symbol for `code`, falling back to `code` unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::currency::symbol_for;
///
/// assert_eq!(symbol_for("USD"), "$");
/// assert_eq!(symbol_for("XYZ"), "XYZ");
/// ```
pub fn symbol_for(code: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_list_is_sorted_and_unique() {
        let mut sorted = SUPPORTED_CURRENCIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, SUPPORTED_CURRENCIES);
        assert_eq!(SUPPORTED_CURRENCIES.len(), 153);
    }

    #[test]
    fn test_every_code_is_three_uppercase_letters() {
        for code in SUPPORTED_CURRENCIES {
            assert_eq!(code.len(), 3, "{code}");
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{code}");
        }
    }

    #[test]
    fn test_currency_code_parsing() {
        assert_eq!("USD".parse::<CurrencyCode>(), Ok(CurrencyCode::USD));
        assert_eq!(CurrencyCode::new("EUR"), Some(CurrencyCode::EUR));
        assert!(CurrencyCode::new("XYZ").is_none());
        assert!(CurrencyCode::new("usd").is_none());
        assert_eq!(
            "XYZ".parse::<CurrencyCode>(),
            Err(UnsupportedCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_symbol_for() {
        assert_eq!(symbol_for("USD"), "$");
        assert_eq!(symbol_for("EUR"), "€");
        assert_eq!(symbol_for("SEK"), "kr");
        assert_eq!(symbol_for("AED"), "AED");
        assert_eq!(symbol_for("XYZ"), "XYZ");
        assert_eq!(CurrencyCode::USD.symbol(), "$");
    }

    #[test]
    fn test_every_symbol_belongs_to_a_supported_code() {
        for (code, _) in CURRENCY_SYMBOLS {
            assert!(CurrencyCode::new(code).is_some(), "{code}");
        }
    }

    #[test]
    fn test_list_supported_currencies_preserves_order() {
        let codes: Vec<CurrencyCode> = list_supported_currencies().collect();
        assert_eq!(codes.len(), SUPPORTED_CURRENCIES.len());
        assert_eq!(codes[0].as_str(), "AED");
        assert_eq!(codes[codes.len() - 1].as_str(), "ZWL");
    }

    #[test]
    fn test_currency_code_serde() {
        let json = serde_json::to_string(&CurrencyCode::USD).unwrap();
        assert_eq!(json, "\"USD\"");
        let code: CurrencyCode = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(code, CurrencyCode::EUR);
        assert!(serde_json::from_str::<CurrencyCode>("\"XYZ\"").is_err());
    }
}
