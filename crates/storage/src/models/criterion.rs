use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A bounded scoring dimension within a category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Criterion {
    pub criterion_id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    /// Upper bound for the points of any mark on this criterion
    pub max_points: Decimal,
    /// Presentation order within the category, ascending
    pub display_order: i32,
    pub created_at: chrono::NaiveDateTime,
}
