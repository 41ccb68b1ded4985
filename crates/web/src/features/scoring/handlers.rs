use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        completeness::{UnmarkedParticipantsResponse, UnmarkedQuery},
        leaderboard::LeaderboardResponse,
    },
};
use uuid::Uuid;

use crate::error::{WebError, degrade_on_read_failure};

use super::services;

#[utoipa::path(
    get,
    path = "/api/categories/{id}/leaderboard",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Participants ranked by total score, highest first", body = LeaderboardResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "scoring"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let leaderboard = degrade_on_read_failure(
        services::get_leaderboard(db.pool(), category_id).await,
        "leaderboard",
        || LeaderboardResponse {
            category_id,
            category_name: String::new(),
            entries: Vec::new(),
        },
    )?;

    Ok(Json(leaderboard).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/unmarked",
    params(
        ("id" = Uuid, Path, description = "Category ID"),
        UnmarkedQuery
    ),
    responses(
        (status = 200, description = "Participants still missing marks from the jury member", body = UnmarkedParticipantsResponse),
        (status = 404, description = "Category or jury member not found")
    ),
    tag = "scoring"
)]
pub async fn get_unmarked_participants(
    State(db): State<Database>,
    Path(category_id): Path<Uuid>,
    Query(query): Query<UnmarkedQuery>,
) -> Result<Response, WebError> {
    let unmarked = degrade_on_read_failure(
        services::get_unmarked_participants(db.pool(), category_id, query.jury_member_id).await,
        "unmarked participants",
        || UnmarkedParticipantsResponse {
            category_id,
            jury_member_id: query.jury_member_id,
            total_criteria: 0,
            participant_ids: Vec::new(),
        },
    )?;

    Ok(Json(unmarked).into_response())
}
