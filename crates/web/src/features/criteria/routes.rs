use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_criterion, delete_criterion, get_criterion, list_criteria, update_criterion,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_criteria).post(create_criterion))
        .route(
            "/:id",
            get(get_criterion).put(update_criterion).delete(delete_criterion),
        )
}
