// Error taxonomy for the AI pipeline

use thiserror::Error;

/// Errors that cross the pipeline boundary.
///
/// Parse and shape problems in model replies never appear here; the
/// normalizer absorbs them and resolves to a static fallback payload.
#[derive(Debug, Error)]
pub enum AiError {
    /// The OpenRouter credential is missing; detected before any network I/O
    #[error("OPENROUTER_API_KEY is not configured. Please set it in your environment or .env file.")]
    Configuration,

    /// Network-level failure reaching the provider
    #[error("request to OpenRouter failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("OpenRouter API error: {0}")]
    Upstream(String),
}
