#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Author;
use crate::domain::models::DraftEmail;
use crate::domain::models::Message;
use crate::domain::models::Query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A turn was appended at the given transcript index.
    TurnAppended(usize),
    AwaitingReplyChanged(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The turn was recorded and a request handed to the assistant.
    Accepted,
    /// Empty or whitespace-only input, nothing happened.
    Empty,
    /// A reply is still outstanding, nothing happened.
    Busy,
}

/// Chat transcript plus the single outstanding request it may have. The
/// session is idle until a submission is accepted, and waits for exactly one
/// reply before accepting the next.
pub struct ChatSession {
    turns: Vec<Message>,
    awaiting_reply: bool,
    fallback: String,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl ChatSession {
    pub fn new(greeting: &str, fallback: &str) -> ChatSession {
        return ChatSession {
            turns: vec![Message::new(Author::Assistant, greeting)],
            awaiting_reply: false,
            fallback: fallback.to_string(),
            subscribers: vec![],
        };
    }

    pub fn turns(&self) -> &[Message] {
        return &self.turns;
    }

    pub fn is_awaiting_reply(&self) -> bool {
        return self.awaiting_reply;
    }

    /// Receives an event after every transcript or state change.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel::<SessionEvent>();
        self.subscribers.push(tx);
        return rx;
    }

    pub fn submit(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Submission {
        if self.awaiting_reply {
            tracing::debug!("Submission rejected, a reply is still outstanding");
            return Submission::Busy;
        }

        let query = match Query::parse(input) {
            Some(query) => query,
            None => return Submission::Empty,
        };

        self.push_turn(Message::new(Author::User, input));
        self.set_awaiting_reply(true);

        if let Err(err) = tx.send(Action::AssistantRequest(query)) {
            tracing::error!(error = ?err, "Failed to dispatch assistant request");
            let fallback = self.fallback.to_string();
            self.settle(&fallback);
        }

        return Submission::Accepted;
    }

    /// Records the reply for the outstanding request. Returns false when no
    /// request was outstanding, in which case the reply is dropped.
    pub fn settle(&mut self, reply: &str) -> bool {
        if !self.awaiting_reply {
            tracing::warn!("Dropping assistant reply with no outstanding request");
            return false;
        }

        self.push_turn(Message::new(Author::Assistant, reply));
        self.set_awaiting_reply(false);

        return true;
    }

    /// Draft from the most recent assistant turn that carries one.
    pub fn latest_draft(&self) -> Option<DraftEmail> {
        return self
            .turns
            .iter()
            .rev()
            .filter(|turn| return turn.author() == Author::Assistant)
            .find_map(|turn| return turn.extract_draft().draft);
    }

    fn push_turn(&mut self, message: Message) {
        self.turns.push(message);
        self.notify(SessionEvent::TurnAppended(self.turns.len() - 1));
    }

    fn set_awaiting_reply(&mut self, awaiting_reply: bool) {
        self.awaiting_reply = awaiting_reply;
        self.notify(SessionEvent::AwaitingReplyChanged(awaiting_reply));
    }

    fn notify(&mut self, event: SessionEvent) {
        self.subscribers
            .retain(|subscriber| return subscriber.send(event).is_ok());
    }
}
