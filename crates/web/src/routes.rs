use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ApiDoc;
use crate::features::{admin, categories, criteria, jury, marks, participants, scoring};

/// Assemble the full application router
pub fn router(db: Database, cors: CorsLayer) -> Router {
    let api = Router::new()
        .nest(
            "/categories",
            categories::routes::routes().merge(scoring::routes::routes()),
        )
        .nest("/criteria", criteria::routes::routes())
        .nest("/participants", participants::routes::routes())
        .nest("/jury", jury::routes::routes())
        .nest("/marks", marks::routes::routes())
        .nest("/admin", admin::routes::routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(db)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
