use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use test_utils::profile_fixture;

use super::Assistant;
use super::Profiles;
use crate::domain::models::Backend;
use crate::domain::models::BackendError;
use crate::domain::models::BackendName;
use crate::domain::models::BackendPrompt;

pub enum FakeReply {
    Text(String),
    MissingCredentials,
    Status(u16),
    Empty,
}

/// Backend double that records every prompt it receives.
pub struct FakeBackend {
    reply: FakeReply,
    pub calls: Arc<AtomicUsize>,
    pub prompts: Arc<Mutex<Vec<BackendPrompt>>>,
}

impl FakeBackend {
    pub fn new(reply: FakeReply) -> FakeBackend {
        return FakeBackend {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(vec![])),
        };
    }
}

#[async_trait]
impl Backend for FakeBackend {
    fn name(&self) -> BackendName {
        return BackendName::Gemini;
    }

    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    async fn get_completion(&self, prompt: BackendPrompt) -> Result<String, BackendError> {
        if let FakeReply::MissingCredentials = self.reply {
            return Err(BackendError::MissingCredentials(BackendName::Gemini));
        }

        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt);

        match &self.reply {
            FakeReply::Text(text) => return Ok(text.to_string()),
            FakeReply::Status(status) => {
                return Err(BackendError::Status {
                    backend: BackendName::Gemini,
                    status: *status,
                });
            }
            FakeReply::Empty => return Err(BackendError::EmptyResponse(BackendName::Gemini)),
            FakeReply::MissingCredentials => {
                return Err(BackendError::MissingCredentials(BackendName::Gemini));
            }
        }
    }
}

pub fn create_assistant(reply: FakeReply) -> Result<(Assistant, Arc<AtomicUsize>)> {
    let profile = Profiles::parse(profile_fixture())?;
    let backend = FakeBackend::new(reply);
    let calls = backend.calls.clone();

    return Ok((Assistant::new(Box::new(backend), &profile), calls));
}
