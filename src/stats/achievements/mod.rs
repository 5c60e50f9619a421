//! Gamification: a fixed catalog of achievements over live aggregates

mod checker;
mod definitions;

pub use checker::{AchievementInputs, check_achievements, evaluate};
pub use definitions::{ACHIEVEMENTS, AchievementDef, AchievementId, AchievementMetric};
