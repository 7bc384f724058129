use super::DraftEmail;
use super::Query;

pub enum Action {
    AssistantRequest(Query),
    CopyDraft(DraftEmail),
}
