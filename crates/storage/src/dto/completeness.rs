use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct UnmarkedQuery {
    pub jury_member_id: Uuid,
}

/// Participants still missing at least one mark from the jury member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnmarkedParticipantsResponse {
    pub category_id: Uuid,
    pub jury_member_id: Uuid,
    pub total_criteria: usize,
    /// In participant name order
    pub participant_ids: Vec<Uuid>,
}
