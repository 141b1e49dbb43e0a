//! Application services layer - Use cases and business logic.
//!
//! Services apply the business rules (natural-key uniqueness, partial
//! updates, credential handling) on top of the repositories. They are
//! stateless; each call stands alone.

mod auth_service;
mod client_service;
pub mod container;
mod contract_service;
mod service_service;
mod user_service;

pub use container::Services;

pub use auth_service::{AuthResponse, AuthService, Authenticator, Claims};
pub use client_service::{ClientManager, ClientService};
pub use contract_service::{ContractManager, ContractService};
pub use service_service::{ServiceManager, ServiceService};
pub use user_service::{UserManager, UserService};
