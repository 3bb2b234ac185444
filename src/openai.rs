//! Utilities for querying the OpenAI API via the chat completions endpoint.
//!
//! For specific details on request/response schemas, see the [OpenAI API chat completions docs](https://platform.openai.com/docs/api-reference/chat/create).

use std::env;

use serde::{Deserialize, Serialize};

use crate::cli::COMPLETION_MODEL;
use crate::errors::BuddyError;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_KEY_ENV: &str = "BUDDY_OPENAI_KEY";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A `chat/completions` `messages` item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A `chat/completions` request body. Also serves as the internal request
/// contract: immutable once constructed, with the model pinned to
/// [`COMPLETION_MODEL`].
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>, temperature: f32) -> Self {
        CompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            messages,
            temperature,
        }
    }
}

/// A `chat/completions` response choice
#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

/// A `chat/completions` response message
#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// A `chat/completions` response
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// The remote chat-completion capability. Workflows depend on this trait so
/// the remote service can be swapped for a stub in tests.
pub trait ChatCompletion {
    /// Perform one synchronous completion call and return the reply text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, BuddyError>;
}

/// Client for the OpenAI chat completions endpoint. Constructed explicitly
/// from an API key, no ambient globals.
pub struct OpenAiClient {
    api_key: String,
    http: reqwest::blocking::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        OpenAiClient {
            api_key,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Build a client from the `BUDDY_OPENAI_KEY` environment variable.
    /// Fails before any I/O if the key is unset or empty.
    pub fn from_env() -> Result<Self, BuddyError> {
        let api_key = env::var(OPENAI_KEY_ENV).map_err(|_| BuddyError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(BuddyError::MissingApiKey);
        }
        Ok(OpenAiClient::new(api_key))
    }
}

impl ChatCompletion for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, BuddyError> {
        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| String::new());
            return Err(BuddyError::Api { status, body });
        }

        let parsed: ChatResponse = response.json()?;
        let first = parsed
            .choices
            .into_iter()
            .next()
            .ok_or(BuddyError::EmptyCompletion)?;
        Ok(first.message.content)
    }
}
