//! SeaORM entity definitions
//!
//! These are database-specific models, kept separate from the domain
//! records they map into.

pub mod client;
pub mod contract;
pub mod service;
pub mod user;
