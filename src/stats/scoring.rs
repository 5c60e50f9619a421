//! Points awarded for completed days

use serde::{Deserialize, Serialize};

use crate::{DayStatus, Flow, TrackingType};

/// Point values for completions and over-goal bonuses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Flat points per completed day
    #[serde(default = "default_base_points")]
    pub base_points: u64,

    /// Bonus per full goal multiple exceeded on quantitative flows
    #[serde(default = "default_quantitative_bonus")]
    pub quantitative_bonus: u64,

    /// Bonus per full goal-duration multiple exceeded on time-based flows
    #[serde(default = "default_time_bonus")]
    pub time_bonus: u64,
}

fn default_base_points() -> u64 {
    10
}

fn default_quantitative_bonus() -> u64 {
    5
}

fn default_time_bonus() -> u64 {
    3
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_points: default_base_points(),
            quantitative_bonus: default_quantitative_bonus(),
            time_bonus: default_time_bonus(),
        }
    }
}

impl ScoringRules {
    /// Points for one completed day of `flow`.
    pub fn points_for(&self, flow: &Flow, status: &DayStatus) -> u64 {
        self.base_points.saturating_add(self.bonus_for(flow, status))
    }

    fn bonus_for(&self, flow: &Flow, status: &DayStatus) -> u64 {
        match flow.tracking_type {
            TrackingType::Binary => 0,
            TrackingType::Quantitative => {
                let Some(entry) = &status.quantitative else {
                    return 0;
                };
                let goal = entry.goal.or(flow.goal).unwrap_or(0.0);
                full_multiples_over(entry.count, goal)
                    .saturating_mul(self.quantitative_bonus)
            }
            TrackingType::TimeBased => {
                let Some(entry) = &status.timebased else {
                    return 0;
                };
                let goal = flow.goal_seconds() as f64;
                full_multiples_over(entry.total_duration, goal)
                    .saturating_mul(self.time_bonus)
            }
        }
    }
}

/// `floor((value - goal) / goal)` when `value` exceeds a positive goal, else 0.
/// Saturates at `u64::MAX`.
fn full_multiples_over(value: f64, goal: f64) -> u64 {
    if !goal.is_finite() || goal <= 0.0 || !value.is_finite() || value <= goal {
        return 0;
    }
    ((value - goal) / goal).floor() as u64
}
