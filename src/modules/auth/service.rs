use anyhow::anyhow;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::events::AuthEvent;
use super::model::{Claims, LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Authenticates a credential pair and issues an access token.
    ///
    /// Unknown email, wrong password, and inactive account all surface as
    /// the same 401 so the response never reveals whether the email exists.
    #[instrument(skip(state, dto), fields(email = %dto.email))]
    pub async fn login(state: &AppState, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        let record = state
            .store
            .find_by_email(&dto.email)
            .await
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid email or password")))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::unauthorized(anyhow!("Invalid email or password")));
        }

        if !record.is_active {
            warn!(user_id = %record.id, "login attempt on inactive account");
            return Err(AppError::unauthorized(anyhow!("Invalid email or password")));
        }

        let (token, expires_at) =
            create_access_token(record.id, &record.email, &record.roles, &state.jwt_config)?;

        state
            .auth_events
            .publish(AuthEvent::LoggedIn { user_id: record.id });
        info!(user_id = %record.id, "user logged in");

        Ok(LoginResponse {
            token,
            expires_at,
            user: record.into(),
        })
    }

    /// Revokes the token behind an already-validated set of claims.
    ///
    /// The auth extractor guarantees a JTI is present on any accepted
    /// request, so the missing-JTI branch indicates a token issuance bug.
    /// Revocation is idempotent: logging out twice with the same token
    /// succeeds both times.
    #[instrument(skip(state, claims), fields(sub = %claims.sub))]
    pub async fn logout(state: &AppState, claims: &Claims) -> Result<(), AppError> {
        if claims.jti.is_empty() {
            error!(sub = %claims.sub, "accepted token has no JTI, check token issuance");
            return Err(AppError::bad_request(anyhow!("Invalid token")));
        }

        state.blacklist.revoke(&claims.jti).await;

        if let Ok(user_id) = Uuid::parse_str(&claims.sub) {
            state.auth_events.publish(AuthEvent::LoggedOut { user_id });
        }
        info!(jti = %claims.jti, "token revoked");

        Ok(())
    }
}
