pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::store::LeaveStore;
use crate::services::{auth_service::AuthService, leave_service::LeaveService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub leave_service: LeaveService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn LeaveStore>) -> Self {
        let config = Arc::new(config);
        let auth_service = AuthService::new(store.clone(), config.clone());
        let leave_service = LeaveService::new(store);

        Self {
            config,
            auth_service,
            leave_service,
        }
    }
}
