use anyhow::anyhow;
use tracing::instrument;
use uuid::Uuid;

use crate::store::DataStore;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

use super::model::{Log, LogFilterParams, PaginatedLogsResponse};

pub struct LogService;

impl LogService {
    #[instrument(skip(store, params))]
    pub async fn list_logs(
        store: &DataStore,
        params: &LogFilterParams,
    ) -> Result<PaginatedLogsResponse, AppError> {
        let logs = store.list_logs().await;
        Ok(paginate(
            filter_by_action(logs, params.action.as_deref()),
            &params.pagination,
        ))
    }

    #[instrument(skip(store))]
    pub async fn get_log(store: &DataStore, id: i64) -> Result<Log, AppError> {
        store
            .get_log(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Log with id {} not found", id)))
    }

    /// Logs for a single user. 404s when the user itself does not exist so
    /// that an empty history and a bad id are distinguishable.
    #[instrument(skip(store, params))]
    pub async fn logs_for_user(
        store: &DataStore,
        user_id: Uuid,
        params: &LogFilterParams,
    ) -> Result<PaginatedLogsResponse, AppError> {
        if store.get_user(user_id).await.is_none() {
            return Err(AppError::not_found(anyhow!(
                "User with id {} not found",
                user_id
            )));
        }

        let logs = store.logs_for_user(user_id).await;
        Ok(paginate(
            filter_by_action(logs, params.action.as_deref()),
            &params.pagination,
        ))
    }
}

/// Maps the short filter values clients send to the stored action names.
/// Anything unrecognized means no filtering.
fn action_name(filter: &str) -> Option<&'static str> {
    match filter {
        "View" => Some("View User"),
        "Add" => Some("Add User"),
        "Edit" => Some("Edit User"),
        "Delete" => Some("Delete User"),
        "Login" => Some("Login"),
        "Logout" => Some("Logout"),
        _ => None,
    }
}

fn filter_by_action(logs: Vec<Log>, filter: Option<&str>) -> Vec<Log> {
    match filter.and_then(action_name) {
        Some(name) => logs
            .into_iter()
            .filter(|l| l.performed_action == name)
            .collect(),
        None => logs,
    }
}


fn paginate(logs: Vec<Log>, params: &PaginationParams) -> PaginatedLogsResponse {
    let total = logs.len() as i64;
    let data = logs
        .into_iter()
        .skip(params.offset() as usize)
        .take(params.limit() as usize)
        .collect();

    PaginatedLogsResponse {
        data,
        meta: PaginationMeta::new(total, params),
    }
}
