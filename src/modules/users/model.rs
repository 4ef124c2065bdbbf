//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - User representation returned by the API (never carries the
//!   password hash)
//! - [`UserRole`] - System role names embedded in token claims
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`] - Create a new user
//! - [`UpdateUserDto`] - Replace a user's editable fields
//! - [`UserFilterParams`] - Query parameters for listing users

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::UserRecord;
use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::utils::serde::deserialize_optional_bool;

/// System roles. Admins manage users and audit logs; regular users can only
/// authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "user" => Some(UserRole::User),
            _ => None,
        }
    }
}

/// A user as exposed by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub roles: Vec<UserRole>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            forename: record.forename,
            surname: record.surname,
            email: record.email,
            is_active: record.is_active,
            date_of_birth: record.date_of_birth,
            roles: record.roles,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// DTO for creating a new user. Admin only.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1))]
    pub forename: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub date_of_birth: Option<chrono::NaiveDate>,
    /// Roles to assign. Defaults to the regular `user` role.
    #[serde(default = "default_roles")]
    pub roles: Vec<UserRole>,
}

fn default_is_active() -> bool {
    true
}

fn default_roles() -> Vec<UserRole> {
    vec![UserRole::User]
}

/// DTO for replacing a user's editable fields. The password and role
/// assignments are not editable through this endpoint.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1))]
    pub forename: String,
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(email)]
    pub email: String,
    pub is_active: bool,
    pub date_of_birth: Option<chrono::NaiveDate>,
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserFilterParams {
    /// Filter by account activity (`true` for active accounts only).
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Paginated response containing users.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: PaginationMeta,
}
