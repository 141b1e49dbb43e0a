//! HTTP request handlers.

pub mod auth_handler;
pub mod client_handler;
pub mod contract_handler;
pub mod service_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use client_handler::client_routes;
pub use contract_handler::contract_routes;
pub use service_handler::service_routes;
pub use user_handler::user_routes;
