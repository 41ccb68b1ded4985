use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        comparison::{ComparisonQuery, ComparisonResponse},
        mark::{MarkFilter, SubmitMarksRequest, SubmitMarksResponse},
    },
    models::Mark,
};
use validator::Validate;

use crate::error::{WebError, degrade_on_read_failure};

use super::services;

#[utoipa::path(
    get,
    path = "/api/marks",
    params(MarkFilter),
    responses(
        (status = 200, description = "Marks matching the filters", body = Vec<Mark>)
    ),
    tag = "marks"
)]
pub async fn list_marks(
    State(db): State<Database>,
    Query(filter): Query<MarkFilter>,
) -> Result<Response, WebError> {
    let marks = services::list_marks(db.pool(), &filter).await?;

    Ok(Json(marks).into_response())
}

#[utoipa::path(
    put,
    path = "/api/marks",
    request_body = SubmitMarksRequest,
    responses(
        (status = 200, description = "All marks stored; earlier marks for the same criteria were overwritten", body = SubmitMarksResponse),
        (status = 400, description = "Incomplete, out of range or foreign marks; nothing was stored"),
        (status = 404, description = "Participant or jury member not found")
    ),
    tag = "marks"
)]
pub async fn submit_marks(
    State(db): State<Database>,
    Json(req): Json<SubmitMarksRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let marks = services::submit_marks(db.pool(), &req).await?;

    Ok(Json(SubmitMarksResponse {
        jury_member_id: req.jury_member_id,
        participant_id: req.participant_id,
        marks,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/marks/comparison",
    params(ComparisonQuery),
    responses(
        (status = 200, description = "The jury member's own marks per participant, in request order", body = ComparisonResponse),
        (status = 400, description = "Malformed participant id list"),
        (status = 404, description = "Jury member not found")
    ),
    tag = "marks"
)]
pub async fn compare_marks(
    State(db): State<Database>,
    Query(query): Query<ComparisonQuery>,
) -> Result<Response, WebError> {
    let participant_ids = query.participant_ids().map_err(WebError::BadRequest)?;

    let comparison = degrade_on_read_failure(
        services::compare_marks(db.pool(), query.jury_member_id, &participant_ids).await,
        "comparison",
        || ComparisonResponse {
            jury_member_id: query.jury_member_id,
            rows: Vec::new(),
        },
    )?;

    Ok(Json(comparison).into_response())
}
