//! Achievement checking logic
//!
//! Every achievement is a threshold on an aggregate that was already
//! computed for the stats response.

use super::definitions::{ACHIEVEMENTS, AchievementDef, AchievementMetric};
use crate::stats::aggregate::round2;
use crate::stats::models::Achievement;

/// Aggregates the catalog is evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AchievementInputs {
    pub total_completions: u32,
    pub best_streak: u32,
    pub success_rate: f64,
    pub flow_count: usize,
}

impl AchievementInputs {
    fn value_of(&self, metric: AchievementMetric) -> f64 {
        match metric {
            AchievementMetric::TotalCompletions => self.total_completions as f64,
            AchievementMetric::BestStreak => self.best_streak as f64,
            AchievementMetric::SuccessRate => round2(self.success_rate),
            AchievementMetric::FlowCount => self.flow_count as f64,
        }
    }
}

/// Evaluate one definition. Completion is inclusive at the target.
pub fn evaluate(def: &AchievementDef, inputs: &AchievementInputs) -> Achievement {
    let progress = inputs.value_of(def.metric);
    Achievement {
        id: def.id.as_str().to_string(),
        title: def.title.to_string(),
        description: def.description.to_string(),
        progress,
        target: def.target,
        completed: progress >= def.target,
        color: def.color.to_string(),
    }
}

/// Evaluate the full catalog in display order.
pub fn check_achievements(inputs: &AchievementInputs) -> Vec<Achievement> {
    ACHIEVEMENTS.iter().map(|def| evaluate(def, inputs)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::achievements::AchievementId;

    fn find<'a>(list: &'a [Achievement], id: AchievementId) -> &'a Achievement {
        list.iter().find(|a| a.id == id.as_str()).unwrap()
    }

    #[test]
    fn test_catalog_order_and_size() {
        let list = check_achievements(&AchievementInputs::default());
        let ids: Vec<_> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["century-club", "month-master", "consistency-king", "flow-master"]
        );
        assert!(list.iter().all(|a| !a.completed));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let below = check_achievements(&AchievementInputs {
            total_completions: 99,
            best_streak: 29,
            success_rate: 79.99,
            flow_count: 4,
        });
        assert!(below.iter().all(|a| !a.completed));

        let at = check_achievements(&AchievementInputs {
            total_completions: 100,
            best_streak: 30,
            success_rate: 80.0,
            flow_count: 5,
        });
        assert!(at.iter().all(|a| a.completed));
    }

    #[test]
    fn test_success_rate_progress_rounded() {
        let list = check_achievements(&AchievementInputs {
            success_rate: 66.666_666,
            ..Default::default()
        });
        let king = find(&list, AchievementId::ConsistencyKing);
        assert_eq!(king.progress, 66.67);
        assert_eq!(king.target, 80.0);
    }

    #[test]
    fn test_flow_master_with_five_flows() {
        let list = check_achievements(&AchievementInputs {
            flow_count: 5,
            ..Default::default()
        });
        let master = find(&list, AchievementId::FlowMaster);
        assert_eq!(master.progress, 5.0);
        assert!(master.completed);
    }
}
