use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One jury member's points for one participant on one criterion.
///
/// `(participant_id, criterion_id, jury_member_id)` is the natural key: a
/// second submission for the same triple overwrites `points` and bumps
/// `updated_at` rather than adding a row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mark {
    pub mark_id: Uuid,
    pub participant_id: Uuid,
    pub criterion_id: Uuid,
    pub jury_member_id: Uuid,
    pub points: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
