//! Domain layer - Core business entities and logic
//!
//! Entity records carry their identity as an embedded `Option<i32>`: `None`
//! until the repository assigns one on first save. Request DTOs live next to
//! their entity and carry the validation rules for the HTTP boundary.

mod patch;

pub mod client;
pub mod contract;
pub mod password;
pub mod service;
pub mod user;

pub(crate) use patch::deserialize_some;

pub use client::{Client, CreateClient, UpdateClient};
pub use contract::{Contract, ContractStatus, CreateContract, UpdateContract};
pub use password::Password;
pub use service::{CreateService, Service, UpdateService};
pub use user::{CreateUser, UpdateUser, User, UserResponse, UserRole};
