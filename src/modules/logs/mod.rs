//! Audit logs: the record of user-affecting actions and auth events.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
