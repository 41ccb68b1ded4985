use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::criterion::{CreateCriterionRequest, CriterionFilter, UpdateCriterionRequest},
    models::Criterion,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/criteria",
    params(CriterionFilter),
    responses(
        (status = 200, description = "List criteria in display order", body = Vec<Criterion>)
    ),
    tag = "criteria"
)]
pub async fn list_criteria(
    State(db): State<Database>,
    Query(filter): Query<CriterionFilter>,
) -> Result<Response, WebError> {
    let criteria = services::list_criteria(db.pool(), filter.category_id).await?;

    Ok(Json(criteria).into_response())
}

#[utoipa::path(
    get,
    path = "/api/criteria/{id}",
    params(
        ("id" = Uuid, Path, description = "Criterion ID")
    ),
    responses(
        (status = 200, description = "Criterion found", body = Criterion),
        (status = 404, description = "Criterion not found")
    ),
    tag = "criteria"
)]
pub async fn get_criterion(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let criterion = services::get_criterion(db.pool(), id).await?;

    Ok(Json(criterion).into_response())
}

#[utoipa::path(
    post,
    path = "/api/criteria",
    request_body = CreateCriterionRequest,
    responses(
        (status = 201, description = "Criterion created successfully", body = Criterion),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unknown category or duplicate name")
    ),
    tag = "criteria"
)]
pub async fn create_criterion(
    State(db): State<Database>,
    Json(req): Json<CreateCriterionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let criterion = services::create_criterion(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(criterion)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/criteria/{id}",
    params(
        ("id" = Uuid, Path, description = "Criterion ID")
    ),
    request_body = UpdateCriterionRequest,
    responses(
        (status = 200, description = "Criterion updated successfully", body = Criterion),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Criterion not found"),
        (status = 409, description = "Duplicate name")
    ),
    tag = "criteria"
)]
pub async fn update_criterion(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCriterionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_criterion(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/criteria/{id}",
    params(
        ("id" = Uuid, Path, description = "Criterion ID")
    ),
    responses(
        (status = 204, description = "Criterion and its marks deleted"),
        (status = 404, description = "Criterion not found")
    ),
    tag = "criteria"
)]
pub async fn delete_criterion(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_criterion(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
