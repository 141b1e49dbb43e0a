//! Shared types for the HTTP surface.

mod response;

pub use response::{Created, NoContent, Updated};
