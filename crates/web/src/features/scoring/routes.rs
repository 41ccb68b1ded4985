use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_leaderboard, get_unmarked_participants};

/// Mounted under `/categories` next to the category routes
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:id/leaderboard", get(get_leaderboard))
        .route("/:id/unmarked", get(get_unmarked_participants))
}
