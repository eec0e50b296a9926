//! Generative API abstractions for ClaimLens.
//!
//! - `GenerativeClient`: RPITIT trait for the concrete upstream client
//! - `ModelConnector`: candidate probing and active-model caching

pub mod client;
pub mod connector;
