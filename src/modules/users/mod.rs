//! User management: listing, viewing, creating, updating, and deleting
//! users. Every mutating or viewing action is recorded in the audit log.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
