use anyhow::Context;
use axum::http::HeaderValue;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;
use features::{admin, categories, criteria, jury, marks, participants, scoring};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        categories::handlers::list_category_criteria,
        categories::handlers::list_category_participants,
        criteria::handlers::list_criteria,
        criteria::handlers::get_criterion,
        criteria::handlers::create_criterion,
        criteria::handlers::update_criterion,
        criteria::handlers::delete_criterion,
        participants::handlers::list_participants,
        participants::handlers::get_participant,
        participants::handlers::create_participant,
        participants::handlers::update_participant,
        participants::handlers::delete_participant,
        jury::handlers::list_jury,
        jury::handlers::get_jury_member,
        jury::handlers::create_jury_member,
        jury::handlers::update_jury_member,
        jury::handlers::delete_jury_member,
        marks::handlers::list_marks,
        marks::handlers::submit_marks,
        marks::handlers::compare_marks,
        scoring::handlers::get_leaderboard,
        scoring::handlers::get_unmarked_participants,
        admin::handlers::get_overview,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::criterion::CreateCriterionRequest,
            storage::dto::criterion::UpdateCriterionRequest,
            storage::dto::participant::CreateParticipantRequest,
            storage::dto::participant::UpdateParticipantRequest,
            storage::dto::jury::CreateJuryMemberRequest,
            storage::dto::jury::UpdateJuryMemberRequest,
            storage::dto::mark::MarkEntry,
            storage::dto::mark::SubmitMarksRequest,
            storage::dto::mark::SubmitMarksResponse,
            storage::dto::comparison::ComparisonResponse,
            storage::dto::comparison::ComparisonRow,
            storage::dto::completeness::UnmarkedParticipantsResponse,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::dto::leaderboard::CriterionScore,
            storage::dto::admin::AdminOverviewResponse,
            storage::dto::admin::CriterionWithCategory,
            storage::dto::admin::ParticipantWithCategory,
            storage::models::Category,
            storage::models::Criterion,
            storage::models::Participant,
            storage::models::JuryMember,
            storage::models::Mark,
        )
    ),
    tags(
        (name = "categories", description = "Award categories"),
        (name = "criteria", description = "Scoring criteria of a category"),
        (name = "participants", description = "Participants of a category"),
        (name = "jury", description = "Jury roster"),
        (name = "marks", description = "Mark entry and side-by-side comparison"),
        (name = "scoring", description = "Leaderboard and marking progress"),
        (name = "admin", description = "Administration overview"),
    )
)]
pub(crate) struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting scoreboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let cors = cors_layer(config.cors_allowed_origin.as_deref())?;
    let app = routes::router(db, cors);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(allowed_origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Ok(match allowed_origin {
        Some(origin) => layer.allow_origin(
            origin
                .parse::<HeaderValue>()
                .context("CORS_ALLOWED_ORIGIN is not a valid header value")?,
        ),
        None => layer.allow_origin(Any),
    })
}
