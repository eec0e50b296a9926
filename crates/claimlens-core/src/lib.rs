//! Business logic and port trait definitions for ClaimLens.
//!
//! This crate defines the "ports" (client and store traits) that the
//! infrastructure layer implements. It depends only on `claimlens-types`
//! -- never on `claimlens-infra` or any HTTP/IO crate.

pub mod chat;
pub mod llm;
pub mod relay;
pub mod session;
