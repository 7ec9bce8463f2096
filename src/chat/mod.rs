use async_trait::async_trait;
use thiserror::Error;

pub mod openai;

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("failed to build chat client: {0}")]
    Build(String),
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat provider returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("completion response contained no choices")]
    Empty,
}

/// Request envelope shared by chat-model implementations.
pub struct ChatRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// An abstraction over chat-completion providers.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends one completion request and returns the assistant's reply text.
    async fn complete(&self, request: ChatRequest<'_>) -> ChatResult<String>;
}
