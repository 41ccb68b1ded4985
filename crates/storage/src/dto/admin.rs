use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Category, JuryMember};

/// Everything the administration screen lists, in one payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminOverviewResponse {
    pub categories: Vec<Category>,
    pub criteria: Vec<CriterionWithCategory>,
    pub participants: Vec<ParticipantWithCategory>,
    pub jury: Vec<JuryMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CriterionWithCategory {
    pub criterion_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub name: String,
    pub max_points: Decimal,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ParticipantWithCategory {
    pub participant_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub name: String,
    pub institution: Option<String>,
    pub email: Option<String>,
}
