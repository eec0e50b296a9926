//! Shared domain types for ClaimLens.
//!
//! This crate contains the core domain types used across the ClaimLens
//! backend: chat transcripts, claim context, file handles, generation
//! settings, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
