//! Typed view of an archive day.
//!
//! # Design
//! The client hands back the decoded JSON untouched; it never checks the
//! shape. `DailyRates` is for callers that want to. Only `Date`,
//! `PreviousDate`, `Valute` and each entry's `Value` are required, the rest
//! of what the archive publishes is optional so a sparse reply still parses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One published day of the archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DailyRates {
    pub date: String,
    pub previous_date: String,
    #[serde(rename = "PreviousURL", skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Keyed by currency code, e.g. `USD`.
    pub valute: BTreeMap<String, Valute>,
}

/// A single currency's quote. `value` is roubles per `nominal` units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Valute {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<f64>,
}

impl DailyRates {
    pub fn from_payload(payload: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(payload)
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.valute.get(code).map(|v| v.value)
    }
}
