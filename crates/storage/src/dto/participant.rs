use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::validate_not_blank;

/// Request payload for registering a participant in a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipantRequest {
    pub category_id: Uuid,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 255))]
    pub institution: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255))]
    pub email: Option<String>,
}

/// Request payload for updating a participant
///
/// Omitted fields keep their stored value. `institution` and `email` cannot
/// be cleared through an update once set.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateParticipantRequest {
    pub category_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub institution: Option<String>,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ParticipantFilter {
    pub category_id: Option<Uuid>,
}
