//! Core domain types for flowstats

mod flow;
mod status;

pub use flow::{Flow, TrackingType};
pub use status::{
    COMPLETION_SYMBOL, DayStatus, MISS_SYMBOL, QuantitativeEntry, StatusSymbol, TimeBasedEntry,
    TimeSegment,
};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing key.
///
/// Flow stores backed by SQL columns emit `null` for unset arrays and
/// numbers, which plain `#[serde(default)]` rejects.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
