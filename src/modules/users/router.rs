use axum::{Router, routing::get};

use crate::modules::logs::controller::get_user_logs;
use crate::state::AppState;

use super::controller::{create_user, delete_user, get_user, list_users, update_user};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/logs", get(get_user_logs))
}
