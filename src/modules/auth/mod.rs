//! Authentication: login, logout, token revocation, and auth events.
//!
//! The flow on every authenticated request is fixed: bearer extraction,
//! signature/expiry/issuer/audience validation, JTI extraction, blacklist
//! lookup. See [`crate::middleware::auth`] for the extractor that enforces
//! this ordering.

pub mod blacklist;
pub mod controller;
pub mod events;
pub mod model;
pub mod router;
pub mod service;
