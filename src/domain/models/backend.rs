#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use thiserror::Error;

use super::Query;

/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendName {
    Gemini,
    OpenAI,
}

impl BackendName {
    pub fn parse(text: String) -> Option<BackendName> {
        return BackendName::iter().find(|e| return e.to_string() == text);
    }
}

pub struct BackendPrompt {
    pub text: String,
    pub system_prompt: String,
}

impl BackendPrompt {
    pub fn new(query: &Query, system_prompt: &str) -> BackendPrompt {
        return BackendPrompt {
            text: query.as_str().to_string(),
            system_prompt: system_prompt.to_string(),
        };
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0} credentials are not configured")]
    MissingCredentials(BackendName),

    #[error("request to {backend} failed: {source}")]
    Transport {
        backend: BackendName,
        #[source]
        source: reqwest::Error,
    },

    #[error("{backend} responded with status {status}")]
    Status { backend: BackendName, status: u16 },

    #[error("{0} returned an empty response")]
    EmptyResponse(BackendName),
}

#[async_trait]
pub trait Backend {
    fn name(&self) -> BackendName;

    /// Used by `folio check` to verify all configurations are available to
    /// work with the backend.
    async fn health_check(&self) -> Result<()>;

    /// Requests a single, complete reply for the prompt. Exactly one request is
    /// made, or none when credentials are missing.
    async fn get_completion(&self, prompt: BackendPrompt) -> Result<String, BackendError>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
