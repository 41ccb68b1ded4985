use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_overview;

pub fn routes() -> Router<Database> {
    Router::new().route("/overview", get(get_overview))
}
