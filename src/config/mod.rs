//! Configuration modules for the usergate API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with development-friendly defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: JWT signing secret, issuer, audience, and token lifetime

pub mod cors;
pub mod jwt;
