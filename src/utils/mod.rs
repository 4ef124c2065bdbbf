//! Shared utilities for the usergate API.
//!
//! - [`errors`]: Application error type and HTTP rendering
//! - [`jwt`]: Access token creation and verification
//! - [`pagination`]: Request pagination parameters and response metadata
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Custom serde helpers for query-string deserialization

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
pub mod serde;
