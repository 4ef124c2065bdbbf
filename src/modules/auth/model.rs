use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `name`: The user's email address, used as the display name
/// - `roles`: One entry per role the user holds
/// - `jti`: Unique token identifier, the revocation key for the blacklist
/// - `iss` / `aud`: Issuer and audience, validated on every request
/// - `iat` / `exp`: Issued-at and expiry (Unix timestamps)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub roles: Vec<String>,
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: usize,
    pub exp: usize,
}

/// Login request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login response: the encoded token plus its explicit expiry, so clients
/// never have to decode the token to know when it lapses.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub user: User,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
