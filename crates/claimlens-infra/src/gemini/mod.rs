//! Gemini REST API integration.
//!
//! `GeminiClient` implements both core ports against the Generative
//! Language API: `GenerativeClient` via `models/{model}:generateContent`
//! and `FileStore` via the resumable media-upload endpoint.

pub mod client;
pub mod types;

pub use client::GeminiClient;
