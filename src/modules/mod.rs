pub mod auth;
pub mod logs;
pub mod users;
