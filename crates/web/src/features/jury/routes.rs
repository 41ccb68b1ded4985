use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_jury_member, delete_jury_member, get_jury_member, list_jury, update_jury_member,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_jury).post(create_jury_member))
        .route(
            "/:id",
            get(get_jury_member)
                .put(update_jury_member)
                .delete(delete_jury_member),
        )
}
