#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Natural-language question answering over the accident dataset.
//!
//! Supports Anthropic Claude, `OpenAI` GPT, and any `OpenAI`-compatible
//! local/self-hosted server (Ollama, vLLM, llama.cpp, LM Studio) via the
//! `AI_BASE_URL` environment variable. The engine is a pass-through
//! collaborator: it describes the dataset to the model, forwards the
//! user's question verbatim, and returns the model's text verbatim.
//! Questions are always answered against the full record collection,
//! independent of any active dashboard filters.

pub mod engine;
pub mod providers;

use thiserror::Error;

pub use engine::QuestionEngine;

/// Errors that can occur while answering a question.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the LLM provider failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific error.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}
