use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Profile;
use crate::domain::models::TextArea;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::Submission;

const PLACEHOLDER: &str = "Ask about projects, experience, or how to get in touch...";
const SHORTCUTS: &str = "CTRL+T toggle chat · CTRL+Y copy draft · CTRL+C quit";

fn render_scrollbar(frame: &mut Frame, rect: Rect, state: &mut ScrollbarState) {
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        state,
    );
}

fn draw(
    frame: &mut Frame,
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
    loading: &Loading,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    let mut column_constraints = vec![Constraint::Percentage(100)];
    if app_state.chat_open {
        column_constraints = vec![Constraint::Percentage(55), Constraint::Percentage(45)];
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[0]);

    let profile_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Portfolio")
        .padding(Padding::new(1, 2, 0, 0));
    let profile_rect = profile_block.inner(columns[0]);

    let mut chat_rects = vec![];
    if app_state.chat_open {
        let mut chat_constraints = vec![Constraint::Min(1)];
        if app_state.session.is_awaiting_reply() {
            chat_constraints.push(Constraint::Length(3));
        }
        chat_constraints.push(Constraint::Max(4));

        chat_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(chat_constraints)
            .split(columns[1])
            .to_vec();
    }

    let bubbles_rect = chat_rects.first().copied().unwrap_or_default();
    if profile_rect != app_state.profile_rect || bubbles_rect != app_state.chat_rect {
        app_state.set_rects(profile_rect, bubbles_rect);
    }

    frame.render_widget(profile_block, columns[0]);
    frame.render_widget(
        Paragraph::new(app_state.profile_lines()).scroll((app_state.profile_scroll.offset(), 0)),
        profile_rect,
    );
    render_scrollbar(
        frame,
        columns[0],
        &mut app_state.profile_scroll.scrollbar_state,
    );

    if app_state.chat_open {
        app_state
            .bubble_list
            .render(frame, bubbles_rect, app_state.chat_scroll.offset());
        render_scrollbar(frame, bubbles_rect, &mut app_state.chat_scroll.scrollbar_state);

        if app_state.session.is_awaiting_reply() {
            loading.render(frame, chat_rects[1]);
        }
        if let Some(input_rect) = chat_rects.last() {
            frame.render_widget(textarea.widget(), *input_rect);
        }
    }

    let status = app_state.status.as_deref().unwrap_or(SHORTCUTS);
    frame.render_widget(
        Paragraph::new(status.to_string()).style(Style::default().fg(Color::DarkGray)),
        rows[1],
    );
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::new(PLACEHOLDER);
    let loading = Loading::default();

    loop {
        terminal.draw(|frame| {
            draw(frame, app_state, &textarea, &loading);
        })?;

        match events.next().await? {
            Event::AssistantReply(text) => {
                app_state.handle_reply(&text);
            }
            Event::Notice(text) => {
                app_state.status = Some(text);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLT() => {
                app_state.toggle_chat();
            }
            Event::KeyboardCTRLY() => {
                app_state.copy_latest_draft(&tx)?;
            }
            Event::KeyboardEnter() => {
                if !app_state.chat_open {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                match app_state.submit(&input_str, &tx) {
                    Submission::Accepted => {
                        textarea = TextArea::new(PLACEHOLDER);
                    }
                    Submission::Busy => {
                        app_state.status =
                            Some("Still waiting on the last reply, hang tight.".to_string());
                    }
                    Submission::Empty => (),
                }
            }
            Event::KeyboardCharInput(input) => {
                if app_state.chat_open {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if app_state.chat_open {
                    textarea.insert_str(text);
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll_down();
            }
            Event::UIScrollUp() => {
                app_state.scroll_up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll_page_down();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll_page_up();
            }
            Event::UITick() => (),
        }
    }

    return Ok(());
}

/// Best effort terminal restore, used before printing a panic or error.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    profile: Arc<Profile>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new(profile);

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
