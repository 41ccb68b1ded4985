use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Ranked scores of every participant in a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub category_id: Uuid,
    pub category_name: String,
    pub entries: Vec<LeaderboardEntry>,
}

/// Aggregated score of one participant.
///
/// Values are unrounded; clients round to one decimal for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    /// 1-based position after sorting by `total_score`
    pub rank: u32,
    pub participant_id: Uuid,
    pub participant_name: String,
    pub institution: Option<String>,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    /// Distinct jury members with at least one mark for this participant
    pub jury_count: usize,
    pub criteria_scores: Vec<CriterionScore>,
}

/// Average points of one criterion across the jury members who marked it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CriterionScore {
    pub criterion_id: Uuid,
    pub criterion_name: String,
    pub score: f64,
    pub max_points: f64,
    pub jury_count: usize,
}
