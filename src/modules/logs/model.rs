//! Audit log models.
//!
//! Every significant action against a user record ("Add User", "View User",
//! "Edit User", "Delete User", plus "Login"/"Logout" from the auth event
//! subscriber) is recorded as a [`Log`] entry.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};

/// A single audit log entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Log {
    pub id: i64,
    /// The user the action was performed on (or by, for login/logout).
    pub user_id: Uuid,
    pub performed_action: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for listing logs.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogFilterParams {
    /// Filter by performed action: `View`, `Add`, `Edit`, `Delete`,
    /// `Login`, or `Logout`. Unrecognized values leave the listing
    /// unfiltered.
    #[serde(default)]
    pub action: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Paginated response containing audit logs, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedLogsResponse {
    pub data: Vec<Log>,
    pub meta: PaginationMeta,
}
