//! In-memory data store.
//!
//! The persistence layer for users and audit logs. The store is constructed
//! once at startup, seeded, wrapped in an `Arc`, and shared through
//! [`crate::state::AppState`]. `tokio::sync::RwLock` keeps reads cheap and
//! concurrent while serializing writers.
//!
//! Email lookup is case-insensitive, matching the normalized-email semantics
//! login flows conventionally use.

pub mod seed;

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::logs::model::Log;
use crate::modules::users::model::UserRole;

/// A user as stored, including the bcrypt password hash. Never serialized
/// into API responses; see [`crate::modules::users::model::User`].
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub forename: String,
    pub surname: String,
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password: String,
    pub is_active: bool,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub roles: Vec<UserRole>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default)]
pub struct DataStore {
    users: RwLock<HashMap<Uuid, UserRecord>>,
    logs: RwLock<Vec<Log>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with the seed users and their initial
    /// "Add User" log entries. `cost` is the bcrypt cost used for the seed
    /// password; tests pass a low cost to keep setup fast.
    pub fn seeded(cost: u32) -> Self {
        let mut users = HashMap::new();
        let mut logs = Vec::new();

        for record in seed::seed_users(cost) {
            logs.push(Log {
                id: logs.len() as i64 + 1,
                user_id: record.id,
                performed_action: "Add User".to_string(),
                timestamp: Utc::now(),
            });
            users.insert(record.id, record);
        }

        Self {
            users: RwLock::new(users),
            logs: RwLock::new(logs),
        }
    }

    pub async fn get_user(&self, id: Uuid) -> Option<UserRecord> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Lists users, optionally filtered by account activity, ordered by
    /// surname then forename.
    pub async fn list_users(&self, active: Option<bool>) -> Vec<UserRecord> {
        let users = self.users.read().await;
        let mut result: Vec<UserRecord> = users
            .values()
            .filter(|u| active.is_none_or(|a| u.is_active == a))
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.surname, &a.forename).cmp(&(&b.surname, &b.forename)));
        result
    }

    /// Inserts a new user. Returns `false` without inserting if another user
    /// already holds the email address.
    pub async fn insert_user(&self, record: UserRecord) -> bool {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&record.email))
        {
            return false;
        }
        users.insert(record.id, record);
        true
    }

    /// Replaces an existing user record. Returns `false` if the user does
    /// not exist.
    pub async fn update_user(&self, record: UserRecord) -> bool {
        let mut users = self.users.write().await;
        match users.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    pub async fn delete_user(&self, id: Uuid) -> bool {
        self.users.write().await.remove(&id).is_some()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    /// Appends an audit log entry and returns it. Ids are assigned
    /// sequentially under the write lock; logs are never deleted.
    pub async fn add_log(&self, user_id: Uuid, action: &str) -> Log {
        let mut logs = self.logs.write().await;
        let log = Log {
            id: logs.len() as i64 + 1,
            user_id,
            performed_action: action.to_string(),
            timestamp: Utc::now(),
        };
        logs.push(log.clone());
        log
    }

    /// All log entries, newest first.
    pub async fn list_logs(&self) -> Vec<Log> {
        let logs = self.logs.read().await;
        let mut result = logs.clone();
        result.reverse();
        result
    }

    pub async fn get_log(&self, id: i64) -> Option<Log> {
        self.logs.read().await.iter().find(|l| l.id == id).cloned()
    }

    /// Log entries for one user, newest first.
    pub async fn logs_for_user(&self, user_id: Uuid) -> Vec<Log> {
        let logs = self.logs.read().await;
        let mut result: Vec<Log> = logs.iter().filter(|l| l.user_id == user_id).cloned().collect();
        result.reverse();
        result
    }
}
