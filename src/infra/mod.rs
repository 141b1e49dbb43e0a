//! Infrastructure layer - External systems integration
//!
//! Database connection management, schema migrations and the repository
//! implementations.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    ClientRepository, ClientStore, ContractRepository, ContractStore, ServiceRepository,
    ServiceStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockClientRepository, MockContractRepository, MockServiceRepository, MockUserRepository,
};
