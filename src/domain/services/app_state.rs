#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use tokio::sync::mpsc;

use super::greeting;
use super::BubbleList;
use super::ChatSession;
use super::FallbackReplies;
use super::ProfileView;
use super::Scroll;
use super::SessionEvent;
use super::Submission;
use crate::domain::models::Action;
use crate::domain::models::Profile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    Profile,
    Chat,
}

pub struct AppState {
    pub bubble_list: BubbleList,
    pub chat_open: bool,
    pub chat_rect: Rect,
    pub chat_scroll: Scroll,
    pub profile_rect: Rect,
    pub profile_scroll: Scroll,
    pub session: ChatSession,
    pub status: Option<String>,
    profile: Arc<Profile>,
    profile_view: ProfileView,
    session_events: mpsc::UnboundedReceiver<SessionEvent>,
}

impl AppState {
    pub fn new(profile: Arc<Profile>) -> AppState {
        let replies = FallbackReplies::new(&profile);
        let mut session = ChatSession::new(&greeting(&profile), &replies.interrupted());
        let session_events = session.subscribe();

        let mut app_state = AppState {
            bubble_list: BubbleList::default(),
            chat_open: true,
            chat_rect: Rect::default(),
            chat_scroll: Scroll::default(),
            profile_rect: Rect::default(),
            profile_scroll: Scroll::default(),
            session,
            status: None,
            profile_view: ProfileView::new(&profile, 0),
            profile,
            session_events,
        };
        app_state.sync_chat();

        return app_state;
    }

    /// Pane that receives scroll keys.
    pub fn focus(&self) -> Pane {
        if self.chat_open {
            return Pane::Chat;
        }

        return Pane::Profile;
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }

    pub fn set_rects(&mut self, profile_rect: Rect, chat_rect: Rect) {
        if self.profile_rect.width != profile_rect.width {
            self.profile_view = ProfileView::new(&self.profile, usize::from(profile_rect.width));
        }
        self.profile_rect = profile_rect;
        self.profile_scroll.set_state(
            self.profile_view.lines().len(),
            usize::from(profile_rect.height),
        );

        self.chat_rect = chat_rect;
        self.sync_chat();
    }

    pub fn profile_lines(&self) -> Vec<Line<'static>> {
        return self.profile_view.lines().to_vec();
    }

    pub fn submit(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Submission {
        let res = self.session.submit(input, tx);
        if res == Submission::Accepted {
            self.status = None;
        }
        self.sync_session();

        return res;
    }

    pub fn handle_reply(&mut self, text: &str) {
        self.session.settle(text);
        self.sync_session();
    }

    pub fn copy_latest_draft(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match self.session.latest_draft() {
            Some(draft) => tx.send(Action::CopyDraft(draft))?,
            None => self.status = Some("No draft email to copy yet.".to_string()),
        }

        return Ok(());
    }

    pub fn scroll_up(&mut self) {
        self.focused_scroll().up();
    }

    pub fn scroll_down(&mut self) {
        self.focused_scroll().down();
    }

    pub fn scroll_page_up(&mut self) {
        self.focused_scroll().up_page();
    }

    pub fn scroll_page_down(&mut self) {
        self.focused_scroll().down_page();
    }

    fn focused_scroll(&mut self) -> &mut Scroll {
        match self.focus() {
            Pane::Profile => return &mut self.profile_scroll,
            Pane::Chat => return &mut self.chat_scroll,
        }
    }

    /// Applies pending session notifications. Any transcript change jumps the
    /// chat to its newest turn.
    pub fn sync_session(&mut self) {
        let mut changed = false;
        while self.session_events.try_recv().is_ok() {
            changed = true;
        }

        if changed {
            self.sync_chat();
            self.chat_scroll.last();
        }
    }

    fn sync_chat(&mut self) {
        // Hidden chat panel.
        if self.chat_rect.width == 0 {
            return;
        }

        self.bubble_list
            .set_messages(self.session.turns(), usize::from(self.chat_rect.width));
        self.chat_scroll
            .set_state(self.bubble_list.len(), usize::from(self.chat_rect.height));
    }
}
