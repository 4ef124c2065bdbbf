//! Middleware and extractors for authentication and authorization.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the signature, expiry, issuer, and
//!    audience, then checks the token's JTI against the blacklist
//! 3. Admin-only handlers extract [`role::AdminUser`] instead, which adds
//!    the role check on top
//! 4. The handler executes only if every step passed

pub mod auth;
pub mod role;
