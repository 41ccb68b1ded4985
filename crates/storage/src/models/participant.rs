use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub participant_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub institution: Option<String>,
    pub email: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
