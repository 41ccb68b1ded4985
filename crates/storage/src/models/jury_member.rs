use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A jury member. Marks reference `jury_member_id`, never the display name,
/// so renaming a jury member keeps their marks attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct JuryMember {
    pub jury_member_id: Uuid,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}
