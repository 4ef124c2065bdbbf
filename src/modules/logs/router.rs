use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_log, list_logs};

pub fn init_logs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs))
        .route("/{id}", get(get_log))
}
