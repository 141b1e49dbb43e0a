//! Repository layer - Data access abstraction
//!
//! One repository per entity, each a trait plus a SeaORM-backed store.
//! Repositories only map and look things up; business rules live in the
//! service layer.

mod client_repository;
mod contract_repository;
pub(crate) mod entities;
mod service_repository;
mod user_repository;

pub use client_repository::{ClientRepository, ClientStore};
pub use contract_repository::{ContractRepository, ContractStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use client_repository::MockClientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contract_repository::MockContractRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service_repository::MockServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
