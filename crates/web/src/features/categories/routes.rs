use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_category, delete_category, get_category, list_categories, list_category_criteria,
    list_category_participants, update_category,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/:id/criteria", get(list_category_criteria))
        .route("/:id/participants", get(list_category_participants))
}
