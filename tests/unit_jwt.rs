mod common;

use chrono::Utc;
use uuid::Uuid;

use common::test_jwt_config;
use usergate::config::jwt::JwtConfig;
use usergate::modules::users::model::UserRole;
use usergate::utils::jwt::{create_access_token, verify_token};

#[test]
fn test_issued_token_verifies() {
    let config = test_jwt_config();
    let user_id = Uuid::new_v4();
    let (token, _) =
        create_access_token(user_id, "ploew@example.com", &[UserRole::Admin], &config).unwrap();

    let claims = verify_token(&token, &config).unwrap();
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.name, "ploew@example.com");
    assert_eq!(claims.roles, vec!["admin".to_string()]);
    assert_eq!(claims.iss, config.issuer);
    assert_eq!(claims.aud, config.audience);
}

#[test]
fn test_expiry_matches_configured_ttl() {
    let config = test_jwt_config();
    let before = Utc::now();
    let (token, expires_at) =
        create_access_token(Uuid::new_v4(), "user@example.com", &[UserRole::User], &config)
            .unwrap();
    let after = Utc::now();

    let claims = verify_token(&token, &config).unwrap();
    assert_eq!(claims.exp, expires_at.timestamp() as usize);
    assert_eq!(claims.exp - claims.iat, config.token_expiry as usize);
    assert!(expires_at >= before + chrono::Duration::seconds(config.token_expiry));
    assert!(expires_at <= after + chrono::Duration::seconds(config.token_expiry));
}

#[test]
fn test_jti_is_a_unique_uuid_per_token() {
    let config = test_jwt_config();
    let user_id = Uuid::new_v4();
    let (first, _) =
        create_access_token(user_id, "user@example.com", &[UserRole::User], &config).unwrap();
    let (second, _) =
        create_access_token(user_id, "user@example.com", &[UserRole::User], &config).unwrap();

    let first_claims = verify_token(&first, &config).unwrap();
    let second_claims = verify_token(&second, &config).unwrap();

    assert!(Uuid::parse_str(&first_claims.jti).is_ok());
    assert!(Uuid::parse_str(&second_claims.jti).is_ok());
    assert_ne!(first_claims.jti, second_claims.jti);
}

#[test]
fn test_wrong_secret_is_rejected() {
    let config = test_jwt_config();
    let (token, _) =
        create_access_token(Uuid::new_v4(), "user@example.com", &[UserRole::User], &config)
            .unwrap();

    let other = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        ..config
    };
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_wrong_issuer_is_rejected() {
    let config = test_jwt_config();
    let (token, _) =
        create_access_token(Uuid::new_v4(), "user@example.com", &[UserRole::User], &config)
            .unwrap();

    let other = JwtConfig {
        issuer: "someone-else".to_string(),
        ..config
    };
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_wrong_audience_is_rejected() {
    let config = test_jwt_config();
    let (token, _) =
        create_access_token(Uuid::new_v4(), "user@example.com", &[UserRole::User], &config)
            .unwrap();

    let other = JwtConfig {
        audience: "other-clients".to_string(),
        ..config
    };
    assert!(verify_token(&token, &other).is_err());
}

#[test]
fn test_tampered_signature_is_rejected() {
    let config = test_jwt_config();
    let (token, _) =
        create_access_token(Uuid::new_v4(), "user@example.com", &[UserRole::User], &config)
            .unwrap();
    let (other, _) =
        create_access_token(Uuid::new_v4(), "other@example.com", &[UserRole::User], &config)
            .unwrap();

    // Keep the header and payload but graft on the other token's signature.
    let parts: Vec<&str> = token.split('.').collect();
    let other_sig = other.split('.').nth(2).unwrap();
    let tampered = format!("{}.{}.{}", parts[0], parts[1], other_sig);

    assert!(verify_token(&tampered, &config).is_err());
}

#[test]
fn test_malformed_tokens_are_rejected() {
    let config = test_jwt_config();
    assert!(verify_token("", &config).is_err());
    assert!(verify_token("not-a-jwt", &config).is_err());
    assert!(verify_token("a.b", &config).is_err());
    assert!(verify_token("a.b.c", &config).is_err());
}

#[test]
fn test_roles_are_carried_in_claims() {
    let config = test_jwt_config();
    let (token, _) = create_access_token(
        Uuid::new_v4(),
        "user@example.com",
        &[UserRole::Admin, UserRole::User],
        &config,
    )
    .unwrap();

    let claims = verify_token(&token, &config).unwrap();
    assert_eq!(claims.roles, vec!["admin".to_string(), "user".to_string()]);
}
