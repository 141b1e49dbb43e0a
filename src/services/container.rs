//! Service container - wires repositories and services once at startup.
//!
//! Everything downstream receives its dependencies through this container;
//! no service or repository is reached through a global.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, ClientManager, ClientService, ContractManager, ContractService,
    ServiceManager, ServiceService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{ClientStore, ContractStore, ServiceStore, UserStore};

/// Concrete service container
pub struct Services {
    client_service: Arc<dyn ClientService>,
    service_service: Arc<dyn ServiceService>,
    contract_service: Arc<dyn ContractService>,
    user_service: Arc<dyn UserService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        client_service: Arc<dyn ClientService>,
        service_service: Arc<dyn ServiceService>,
        contract_service: Arc<dyn ContractService>,
        user_service: Arc<dyn UserService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            client_service,
            service_service,
            contract_service,
            user_service,
            auth_service,
        }
    }

    /// Build the full service graph from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let client_repo = Arc::new(ClientStore::new(db.clone()));
        let service_repo = Arc::new(ServiceStore::new(db.clone()));
        let contract_repo = Arc::new(ContractStore::new(db.clone()));
        let user_repo = Arc::new(UserStore::new(db));

        Self {
            client_service: Arc::new(ClientManager::new(client_repo)),
            service_service: Arc::new(ServiceManager::new(service_repo)),
            contract_service: Arc::new(ContractManager::new(contract_repo)),
            user_service: Arc::new(UserManager::new(user_repo.clone())),
            auth_service: Arc::new(Authenticator::new(user_repo, config)),
        }
    }

    pub fn clients(&self) -> Arc<dyn ClientService> {
        self.client_service.clone()
    }

    pub fn services(&self) -> Arc<dyn ServiceService> {
        self.service_service.clone()
    }

    pub fn contracts(&self) -> Arc<dyn ContractService> {
        self.contract_service.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
