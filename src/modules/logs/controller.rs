use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{Log, LogFilterParams, PaginatedLogsResponse};
use super::service::LogService;

/// List all audit logs, newest first
#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Paginated audit logs", body = PaginatedLogsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Logs"
)]
#[instrument(skip(state, _admin, params))]
pub async fn list_logs(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(params): Query<LogFilterParams>,
) -> Result<Json<PaginatedLogsResponse>, AppError> {
    let logs = LogService::list_logs(&state.store, &params).await?;
    Ok(Json(logs))
}

/// Get a single audit log entry
#[utoipa::path(
    get,
    path = "/api/logs/{id}",
    responses(
        (status = 200, description = "The log entry", body = Log),
        (status = 404, description = "Log not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Logs"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_log(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Log>, AppError> {
    let log = LogService::get_log(&state.store, id).await?;
    Ok(Json(log))
}

/// List audit logs for a single user
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    responses(
        (status = 200, description = "Paginated audit logs for the user", body = PaginatedLogsResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Logs"
)]
#[instrument(skip(state, _auth_user, params))]
pub async fn get_user_logs(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<LogFilterParams>,
) -> Result<Json<PaginatedLogsResponse>, AppError> {
    let logs = LogService::logs_for_user(&state.store, id, &params).await?;
    Ok(Json(logs))
}
