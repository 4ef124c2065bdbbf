//! Role-based authorization.
//!
//! Runs after the auth extractor, so a request reaching a role check always
//! carries validated, non-revoked claims.

use anyhow::anyhow;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor for admin-only handlers.
///
/// Wraps [`AuthUser`], so the full validation chain (signature, expiry,
/// JTI, blacklist) runs before the role check. A valid token without the
/// admin role gets a 403; everything else fails exactly as [`AuthUser`]
/// does.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        if !auth_user.has_role(UserRole::Admin) {
            return Err(AppError::forbidden(anyhow!(
                "Access denied. Administrator privileges required."
            )));
        }

        Ok(AdminUser(auth_user))
    }
}
