//! REST API layer: router, handlers, and HTTP error mapping.

pub mod error;
pub mod handlers;
pub mod router;
