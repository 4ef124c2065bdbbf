use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Creates a signed access token for an authenticated user.
///
/// Every token carries a freshly generated JTI (a random UUIDv4) which is
/// the revocation key used by the blacklist on logout. The explicit expiry
/// timestamp is returned alongside the encoded token so callers never have
/// to decode the token to learn when it lapses.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    roles: &[UserRole],
    jwt_config: &JwtConfig,
) -> Result<(String, DateTime<Utc>), AppError> {
    let now = Utc::now();
    let expires_at = now + Duration::seconds(jwt_config.token_expiry);

    let claims = Claims {
        sub: user_id.to_string(),
        name: email.to_string(),
        roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
        jti: Uuid::new_v4().to_string(),
        iss: jwt_config.issuer.clone(),
        aud: jwt_config.audience.clone(),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))?;

    Ok((token, expires_at))
}

/// Verifies a token's signature, expiry, issuer, and audience.
///
/// This covers the structural half of validation only; the blacklist check
/// happens afterwards in the auth extractor so that malformed tokens never
/// reach the revocation store.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&jwt_config.issuer]);
    validation.set_audience(&[&jwt_config.audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
