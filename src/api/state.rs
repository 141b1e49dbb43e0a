//! Application state - Dependency injection container for handlers.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AuthService, ClientService, ContractService, ServiceService, Services, UserService,
};

/// Application state holding every service the handlers reach for.
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<dyn ClientService>,
    pub service_service: Arc<dyn ServiceService>,
    pub contract_service: Arc<dyn ContractService>,
    pub user_service: Arc<dyn UserService>,
    pub auth_service: Arc<dyn AuthService>,
    /// Database handle, used by the health endpoint
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state from a database connection and config via the service
    /// container. This is the production wiring path.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            client_service: container.clients(),
            service_service: container.services(),
            contract_service: container.contracts(),
            user_service: container.users(),
            auth_service: container.auth(),
            database,
        }
    }

    /// Build state from individually injected services (used by tests).
    pub fn new(
        client_service: Arc<dyn ClientService>,
        service_service: Arc<dyn ServiceService>,
        contract_service: Arc<dyn ContractService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            client_service,
            service_service,
            contract_service,
            user_service,
            auth_service,
            database,
        }
    }
}
