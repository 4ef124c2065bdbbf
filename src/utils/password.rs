use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hashed = hash_password("P@ssword1").unwrap();
        assert_ne!(hashed, "P@ssword1");
        assert!(verify_password("P@ssword1", &hashed).unwrap());
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }
}
