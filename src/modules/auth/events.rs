//! Authentication state-change notifications.
//!
//! The auth service publishes an event on every successful login and logout.
//! Subscribers (currently the audit logger spawned at startup; a UI layer
//! could subscribe the same way) receive events over a broadcast channel,
//! keeping the auth service itself free of any observer concerns.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    LoggedIn { user_id: Uuid },
    LoggedOut { user_id: Uuid },
}

/// Broadcast channel for [`AuthEvent`]s. Cheap to clone; all clones publish
/// into the same channel.
#[derive(Debug, Clone)]
pub struct AuthEvents {
    tx: broadcast::Sender<AuthEvent>,
}

impl AuthEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publishes an event to all current subscribers. Publishing with no
    /// subscribers is not an error.
    pub fn publish(&self, event: AuthEvent) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.tx.subscribe()
    }
}

impl Default for AuthEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

/// Spawns the audit logger: subscribes to auth events and records a
/// "Login"/"Logout" entry for each one.
pub fn spawn_audit_logger(state: AppState) -> JoinHandle<()> {
    let mut rx = state.auth_events.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(AuthEvent::LoggedIn { user_id }) => {
                    state.store.add_log(user_id, "Login").await;
                }
                Ok(AuthEvent::LoggedOut { user_id }) => {
                    state.store.add_log(user_id, "Logout").await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "audit logger lagged behind auth events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("auth event channel closed, stopping audit logger");
                    break;
                }
            }
        }
    })
}
