use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::{error, warn};

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that gates every authenticated route.
///
/// Validation order is fixed and runs exactly once per request, before any
/// handler logic: signature/expiry/issuer/audience first, then JTI
/// extraction, then the blacklist lookup. A structurally invalid token never
/// reaches the blacklist, and a token without a JTI is rejected outright
/// (fail closed). Clients get a generic 401 either way; the specific reason
/// is logged.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID from the subject claim
    pub fn user_id(&self) -> Result<uuid::Uuid, AppError> {
        uuid::Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid user ID in token")))
    }

    /// Get the user's email (carried in the name claim)
    pub fn email(&self) -> &str {
        &self.0.name
    }

    /// The token's unique identifier, used as the revocation key
    pub fn jti(&self) -> &str {
        &self.0.jti
    }

    /// Check if the user holds a specific role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.0.roles.iter().any(|r| r == role.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))?;

        // Signature, expiry, issuer, audience. Fails before any state lookup.
        let claims = verify_token(token, &state.jwt_config)?;

        // A signed token without a JTI cannot be revoked, so it is never
        // accepted. This should be unreachable with our issuer.
        if claims.jti.is_empty() {
            error!(sub = %claims.sub, "token passed signature validation but has no JTI");
            return Err(AppError::unauthorized(anyhow!("Invalid token")));
        }

        if state.blacklist.is_revoked(&claims.jti).await {
            warn!(jti = %claims.jti, sub = %claims.sub, "rejected blacklisted token");
            return Err(AppError::unauthorized(anyhow!("Invalid or expired token")));
        }

        Ok(AuthUser(claims))
    }
}
