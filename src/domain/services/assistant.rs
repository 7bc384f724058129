#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;

use super::prompts::system_prompt;
use super::prompts::FallbackReplies;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendError;
use crate::domain::models::BackendPrompt;
use crate::domain::models::Profile;
use crate::domain::models::Query;

/// Answers questions about the profile owner. Every call settles with text to
/// show the user; backend failures are logged and replaced with a fallback.
pub struct Assistant {
    backend: BackendBox,
    system_prompt: String,
    replies: FallbackReplies,
}

impl Assistant {
    pub fn new(backend: BackendBox, profile: &Profile) -> Assistant {
        return Assistant {
            backend,
            system_prompt: system_prompt(profile),
            replies: FallbackReplies::new(profile),
        };
    }

    pub fn replies(&self) -> &FallbackReplies {
        return &self.replies;
    }

    pub async fn ask(&self, query: &Query) -> String {
        let prompt = BackendPrompt::new(query, &self.system_prompt);
        let backend_name = self.backend.name();

        match self.backend.get_completion(prompt).await {
            Ok(text) => {
                if text.trim().is_empty() {
                    tracing::warn!(backend = %backend_name, "Backend returned blank text");
                    return self.replies.empty_response();
                }

                return text;
            }
            Err(BackendError::MissingCredentials(_)) => {
                tracing::warn!(backend = %backend_name, "No credentials configured, assistant unavailable");
                return self.replies.unavailable();
            }
            Err(BackendError::EmptyResponse(_)) => {
                tracing::warn!(backend = %backend_name, "Backend returned an empty response");
                return self.replies.empty_response();
            }
            Err(err) => {
                tracing::error!(backend = %backend_name, error = ?err, "Assistant request failed");
                return self.replies.connection_failed();
            }
        }
    }
}
