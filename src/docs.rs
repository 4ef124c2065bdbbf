use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{Claims, LoginRequest, LoginResponse, MessageResponse};
use crate::modules::logs::model::{Log, LogFilterParams, PaginatedLogsResponse};
use crate::modules::users::model::{
    CreateUserDto, PaginatedUsersResponse, UpdateUserDto, User, UserFilterParams, UserRole,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_profile,
        crate::modules::logs::controller::list_logs,
        crate::modules::logs::controller::get_log,
        crate::modules::logs::controller::get_user_logs,
    ),
    components(
        schemas(
            User,
            UserRole,
            CreateUserDto,
            UpdateUserDto,
            UserFilterParams,
            PaginatedUsersResponse,
            Log,
            LogFilterParams,
            PaginatedLogsResponse,
            Claims,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, logout, and token revocation"),
        (name = "Users", description = "User management endpoints"),
        (name = "Logs", description = "Audit log endpoints")
    ),
    info(
        title = "usergate API",
        version = "0.1.0",
        description = "User management REST API with JWT authentication and in-memory token revocation.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
