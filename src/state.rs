use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::auth::blacklist::TokenBlacklist;
use crate::modules::auth::events::AuthEvents;
use crate::store::DataStore;

/// Shared application state.
///
/// The store and blacklist are constructed once at startup and shared by
/// reference; there are no process-wide globals. Cloning the state is cheap
/// and every clone observes the same store and blacklist.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub blacklist: Arc<TokenBlacklist>,
    pub auth_events: AuthEvents,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state(bcrypt_cost: u32) -> AppState {
    AppState {
        store: Arc::new(DataStore::seeded(bcrypt_cost)),
        blacklist: Arc::new(TokenBlacklist::new()),
        auth_events: AuthEvents::default(),
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
