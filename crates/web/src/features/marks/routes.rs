use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{compare_marks, list_marks, submit_marks};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_marks).put(submit_marks))
        .route("/comparison", get(compare_marks))
}
