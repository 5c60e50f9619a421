//! Per-day status records embedded in a flow's `status` map

use serde::{Deserialize, Serialize};

/// Canonical marker written for a completed day
pub const COMPLETION_SYMBOL: &str = "+";

/// Canonical marker written for an explicitly missed day
pub const MISS_SYMBOL: &str = "-";

/// Outcome marker recorded for a day.
///
/// Clients have historically written several completion markers (`+`, `✓`,
/// `✅`) and miss markers (`-`, `❌`). They all collapse into one variant here
/// so every aggregate applies the same completion check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusSymbol {
    Completed,
    Missed,
    /// Any other marker (e.g. a skip); kept verbatim, never counts as done
    Other(String),
}

impl StatusSymbol {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "+" | "✓" | "✅" => Self::Completed,
            "-" | "❌" => Self::Missed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => COMPLETION_SYMBOL,
            Self::Missed => MISS_SYMBOL,
            Self::Other(s) => s,
        }
    }
}

impl From<String> for StatusSymbol {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<StatusSymbol> for String {
    fn from(symbol: StatusSymbol) -> Self {
        symbol.as_str().to_string()
    }
}

/// Counter entry for quantitative flows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeEntry {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: f64,
    #[serde(default)]
    pub goal: Option<f64>,
    #[serde(default)]
    pub unit_text: Option<String>,
}

/// One timed segment of a time-based entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSegment {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    /// Seconds
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub duration: f64,
}

/// Duration entry for time-based flows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBasedEntry {
    /// Seconds
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_duration: f64,
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub segments: Vec<TimeSegment>,
}

/// Recorded outcome for one flow on one calendar day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStatus {
    #[serde(default)]
    pub symbol: Option<StatusSymbol>,
    #[serde(default)]
    pub quantitative: Option<QuantitativeEntry>,
    #[serde(default)]
    pub timebased: Option<TimeBasedEntry>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl DayStatus {
    pub fn completed() -> Self {
        Self {
            symbol: Some(StatusSymbol::Completed),
            ..Default::default()
        }
    }

    pub fn missed() -> Self {
        Self {
            symbol: Some(StatusSymbol::Missed),
            ..Default::default()
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.symbol, Some(StatusSymbol::Completed))
    }

    pub fn is_missed(&self) -> bool {
        matches!(self.symbol, Some(StatusSymbol::Missed))
    }
}
