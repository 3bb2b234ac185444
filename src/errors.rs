use thiserror::Error;

/// Buddy Errors
#[derive(Debug, Error)]
pub enum BuddyError {
    #[error("BUDDY_OPENAI_KEY is not set. Export it or add it to a .env file.")]
    MissingApiKey,
    #[error("Failed to read logs for service `{service}`: {detail}")]
    SourceUnavailable { service: String, detail: String },
    #[error("Chat completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Chat completion endpoint returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Chat completion response contained no choices")]
    EmptyCompletion,
}
