//! Student CRUD routes. Handlers parse the id themselves so a non-numeric
//! id maps to the crate's own bad_request body.

use crate::handlers::student::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create))
        .route(
            "/students/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
