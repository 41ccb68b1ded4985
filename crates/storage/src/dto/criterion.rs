use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::{fits_points_column, validate_not_blank};

/// Request payload for creating a new criterion
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCriterionRequest {
    pub category_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "validate_max_points"))]
    pub max_points: Decimal,

    /// Appended after the last criterion of the category when omitted
    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

/// Request payload for updating an existing criterion
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCriterionRequest {
    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_max_points"))]
    pub max_points: Option<Decimal>,

    #[validate(range(min = 0))]
    pub display_order: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CriterionFilter {
    pub category_id: Option<Uuid>,
}

fn validate_max_points(max_points: &Decimal) -> Result<(), validator::ValidationError> {
    let message = if max_points <= &Decimal::ZERO {
        "Max points must be greater than zero"
    } else if !fits_points_column(max_points) {
        "Max points must be below 1000000 with at most 2 decimals"
    } else {
        return Ok(());
    };

    let mut error = validator::ValidationError::new("invalid_max_points");
    error.message = Some(message.into());
    Err(error)
}
