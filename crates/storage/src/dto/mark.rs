use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Mark;

/// Equality filters for the raw marks lookup
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MarkFilter {
    pub jury_member_id: Option<Uuid>,
    pub participant_id: Option<Uuid>,
}

/// One criterion score inside a submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkEntry {
    pub criterion_id: Uuid,
    pub points: Decimal,
}

/// A jury member's complete set of marks for one participant
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitMarksRequest {
    pub jury_member_id: Uuid,
    pub participant_id: Uuid,
    #[validate(length(min = 1, message = "At least one mark is required"))]
    pub marks: Vec<MarkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitMarksResponse {
    pub jury_member_id: Uuid,
    pub participant_id: Uuid,
    pub marks: Vec<Mark>,
}
