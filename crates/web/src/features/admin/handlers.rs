use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::admin::AdminOverviewResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Categories, criteria, participants and jury members in one payload", body = AdminOverviewResponse)
    ),
    tag = "admin"
)]
pub async fn get_overview(State(db): State<Database>) -> Result<Response, WebError> {
    let overview = services::get_overview(db.pool()).await?;

    Ok(Json(overview).into_response())
}
