use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::jury::{CreateJuryMemberRequest, UpdateJuryMemberRequest},
    models::JuryMember,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/jury",
    responses(
        (status = 200, description = "List jury members by name", body = Vec<JuryMember>)
    ),
    tag = "jury"
)]
pub async fn list_jury(State(db): State<Database>) -> Result<Response, WebError> {
    let jury = services::list_jury(db.pool()).await?;

    Ok(Json(jury).into_response())
}

#[utoipa::path(
    get,
    path = "/api/jury/{id}",
    params(
        ("id" = Uuid, Path, description = "Jury member ID")
    ),
    responses(
        (status = 200, description = "Jury member found", body = JuryMember),
        (status = 404, description = "Jury member not found")
    ),
    tag = "jury"
)]
pub async fn get_jury_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let member = services::get_jury_member(db.pool(), id).await?;

    Ok(Json(member).into_response())
}

#[utoipa::path(
    post,
    path = "/api/jury",
    request_body = CreateJuryMemberRequest,
    responses(
        (status = 201, description = "Jury member added", body = JuryMember),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Name already in use")
    ),
    tag = "jury"
)]
pub async fn create_jury_member(
    State(db): State<Database>,
    Json(req): Json<CreateJuryMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::create_jury_member(db.pool(), &req.name).await?;

    Ok((StatusCode::CREATED, Json(member)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/jury/{id}",
    params(
        ("id" = Uuid, Path, description = "Jury member ID")
    ),
    request_body = UpdateJuryMemberRequest,
    responses(
        (status = 200, description = "Jury member renamed; existing marks stay attached", body = JuryMember),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Jury member not found"),
        (status = 409, description = "Name already in use")
    ),
    tag = "jury"
)]
pub async fn update_jury_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJuryMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::update_jury_member(db.pool(), id, req.name.as_deref()).await?;

    Ok(Json(member).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/jury/{id}",
    params(
        ("id" = Uuid, Path, description = "Jury member ID")
    ),
    responses(
        (status = 204, description = "Jury member and their marks deleted"),
        (status = 404, description = "Jury member not found")
    ),
    tag = "jury"
)]
pub async fn delete_jury_member(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_jury_member(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
