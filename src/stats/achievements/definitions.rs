//! Achievement definitions and metadata
//!
//! The catalog is fixed; progress is re-evaluated on every stats call.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    CenturyClub,
    MonthMaster,
    ConsistencyKing,
    FlowMaster,
}

impl AchievementId {
    /// Stable string ID used by clients
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CenturyClub => "century-club",
            Self::MonthMaster => "month-master",
            Self::ConsistencyKing => "consistency-king",
            Self::FlowMaster => "flow-master",
        }
    }
}

/// Aggregate an achievement measures its progress against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementMetric {
    /// Completions across all flows in the window
    TotalCompletions,
    /// Best single-flow streak in the window
    BestStreak,
    /// Overall success rate in percent
    SuccessRate,
    /// Number of flows considered
    FlowCount,
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: AchievementMetric,
    pub target: f64,
    pub color: &'static str,
}

/// All achievement definitions, in display order
pub static ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::CenturyClub,
        title: "Century Club",
        description: "Complete 100 flows",
        metric: AchievementMetric::TotalCompletions,
        target: 100.0,
        color: "#FFD700",
    },
    AchievementDef {
        id: AchievementId::MonthMaster,
        title: "Month Master",
        description: "Keep a 30 day streak on a single flow",
        metric: AchievementMetric::BestStreak,
        target: 30.0,
        color: "#FF6B6B",
    },
    AchievementDef {
        id: AchievementId::ConsistencyKing,
        title: "Consistency King",
        description: "Reach an 80% success rate",
        metric: AchievementMetric::SuccessRate,
        target: 80.0,
        color: "#4ECDC4",
    },
    AchievementDef {
        id: AchievementId::FlowMaster,
        title: "Flow Master",
        description: "Track 5 flows",
        metric: AchievementMetric::FlowCount,
        target: 5.0,
        color: "#9B59B6",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["century-club", "month-master", "consistency-king", "flow-master"]
        );
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }
}
