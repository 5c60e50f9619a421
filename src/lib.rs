//! flowstats - statistics for habit ("flow") tracking
//!
//! Flows are user-defined habits with a recurrence rule (every day, selected
//! weekdays, or selected days of the month) and a sparse per-day status map.
//! This crate turns a collection of flows into the numbers a tracking app
//! shows: completion rates, streaks, weekly trends, a monthly heat map and
//! achievements.
//!
//! ## Entry points
//!
//! - [`stats::StatsEngine::compute_overall_stats`] for the overview across flows
//! - [`stats::StatsEngine::compute_flow_stats`] for a single flow
//! - [`stats::StatsEngine::heat_map`] for a month grid

pub mod config;
pub mod domain;
pub mod stats;

pub use domain::*;
