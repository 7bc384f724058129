#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use super::clipboard::ClipboardService;
use super::Assistant;
use crate::domain::models::Action;
use crate::domain::models::DraftEmail;
use crate::domain::models::Event;
use crate::domain::models::Query;

async fn assistant_request(
    assistant: Arc<Assistant>,
    query: Query,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let worker_assistant = assistant.clone();
    let worker = tokio::spawn(async move {
        return worker_assistant.ask(&query).await;
    });

    let reply = match worker.await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(error = ?err, "Assistant worker did not complete");
            assistant.replies().interrupted()
        }
    };

    tx.send(Event::AssistantReply(reply))?;
    return Ok(());
}

fn copy_draft(draft: DraftEmail, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let notice = match ClipboardService::set(draft.format()) {
        Ok(_) => format!("Copied draft \"{}\" to clipboard.", draft.subject),
        Err(err) => {
            tracing::warn!(error = ?err, "Unable to copy draft");
            "Clipboard is unavailable, draft was not copied.".to_string()
        }
    };

    tx.send(Event::Notice(notice))?;
    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        assistant: Arc<Assistant>,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        while let Some(action) = rx.recv().await {
            match action {
                Action::AssistantRequest(query) => {
                    let worker_tx = tx.clone();
                    let worker_assistant = assistant.clone();
                    tokio::spawn(async move {
                        let res = assistant_request(worker_assistant, query, worker_tx).await;
                        if let Err(err) = res {
                            tracing::error!(error = ?err, "Failed to deliver assistant reply");
                        }
                    });
                }
                Action::CopyDraft(draft) => {
                    copy_draft(draft, &tx)?;
                }
            }
        }

        return Ok(());
    }
}
