//! Chat orchestration for ClaimLens.
//!
//! - `preamble`: context preamble and citation-rule rendering
//! - `orchestrator`: the per-session respond() exchange
//! - `analyze`: one-shot, history-free document summarization

pub mod analyze;
pub mod orchestrator;
pub mod preamble;
