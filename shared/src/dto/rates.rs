use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value of `result` when the provider answered normally.
pub const RESULT_SUCCESS: &str = "success";

/// Latest-rates response from the provider.
///
/// Every field is optional on the wire: error responses carry only `result`
/// and `error-type`, and success responses omit `error-type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LatestRatesResponse {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_last_update_utc: Option<String>,
    #[serde(rename = "error-type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

impl LatestRatesResponse {
    /// Whether the provider reported success.
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some(RESULT_SUCCESS)
    }

    /// Rate for `code` relative to the response's base, if present.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}
