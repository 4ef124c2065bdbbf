//! # usergate
//!
//! A user-management REST API built with Rust and Axum, featuring JWT
//! authentication with in-memory token revocation.
//!
//! ## Overview
//!
//! - **Authentication**: JWT access tokens carrying a unique identifier
//!   (JTI) per token, validated on every protected request
//! - **Token revocation**: logout places the token's JTI on a concurrent
//!   in-memory blacklist consulted after structural validation
//! - **User management**: CRUD over a seeded in-memory user store, with an
//!   audit log entry for every user-affecting action
//! - **Role-based access**: user mutations and the global audit-log
//!   listing require the admin role; reads need any valid token
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Configuration (JWT, CORS)
//! ├── middleware/       # Auth and admin-role extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login, logout, blacklist, auth events
//! │   ├── users/       # User management
//! │   └── logs/        # Audit logs
//! ├── store/            # In-memory data store + seed data
//! └── utils/            # Errors, JWT, passwords, pagination
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `model.rs`: Data models and DTOs
//! - `service.rs`: Business logic
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router configuration
//!
//! ## Token Lifecycle
//!
//! A token is usable if and only if its signature is valid, it has not
//! expired, and its JTI is not on the blacklist. Revocation happens on
//! logout and is effective immediately for all subsequent requests; the
//! blacklist lives for the process lifetime and is never persisted.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ISSUER=usergate
//! JWT_AUDIENCE=usergate-clients
//! JWT_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:3000
//! PORT=3000
//! ```

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
