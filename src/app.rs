use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/get/", get(handlers::list_entries))
        .route("/get/:id", get(handlers::get_entry))
        .route("/create/", post(handlers::create_entry))
        .route("/update/:id", put(handlers::update_entry))
        .route("/delete/:id", delete(handlers::delete_entry))
        .with_state(state)
}
