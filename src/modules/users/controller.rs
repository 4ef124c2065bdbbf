use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User, UserFilterParams};
use super::service::UserService;

/// List users, optionally filtered by account activity
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Paginated list of users", body = PaginatedUsersResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth_user, params))]
pub async fn list_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Query(params): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let users = UserService::list_users(&state.store, &params).await?;
    Ok(Json(users))
}

/// Get a single user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.store, id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error or email already exists", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::create_user(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's editable fields
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_user(&state.store, id, dto).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 403, description = "Administrator role required", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    UserService::delete_user(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the authenticated user's profile from the token claims
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let id = auth_user.user_id()?;
    let record = state
        .store
        .get_user(id)
        .await
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User with id {} not found", id)))?;
    Ok(Json(record.into()))
}
