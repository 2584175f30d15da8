use crate::{config::AppConfig, services::store::CarStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: CarStore,
}

impl AppState {
    pub fn new(config: AppConfig, store: CarStore) -> Self {
        Self { config, store }
    }
}
