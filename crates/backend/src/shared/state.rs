use std::sync::Arc;

use crate::shared::config::Config;
use crate::shared::store::Store;
use crate::system::auth::AuthService;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = Store::new();
        if config.store.seed_reference_data {
            crate::shared::seed::seed_reference_data(&store)?;
        }
        Ok(Self {
            store: Arc::new(store),
            auth: Arc::new(AuthService::from_config(&config.auth)?),
        })
    }
}
