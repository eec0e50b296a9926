//! Infrastructure implementations for ClaimLens.
//!
//! Concrete backends for the ports defined in claimlens-core: the Gemini
//! REST client (generation + file storage), the in-memory session store,
//! and the TOML configuration loader.

pub mod config;
pub mod gemini;
pub mod session;
