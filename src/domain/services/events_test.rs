use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use super::EventsService;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    return EventsService::handle_crossterm(CrosstermEvent::Key(KeyEvent::new(code, modifiers)));
}

#[test]
fn it_maps_scroll_keys() {
    assert!(matches!(
        key(KeyCode::Up, KeyModifiers::NONE),
        Some(Event::UIScrollUp())
    ));
    assert!(matches!(
        key(KeyCode::Down, KeyModifiers::NONE),
        Some(Event::UIScrollDown())
    ));
    assert!(matches!(
        key(KeyCode::PageUp, KeyModifiers::NONE),
        Some(Event::UIScrollPageUp())
    ));
    assert!(matches!(
        key(KeyCode::Char('d'), KeyModifiers::CONTROL),
        Some(Event::UIScrollPageDown())
    ));
}

#[test]
fn it_maps_control_shortcuts() {
    assert!(matches!(
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLC())
    ));
    assert!(matches!(
        key(KeyCode::Char('t'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLT())
    ));
    assert!(matches!(
        key(KeyCode::Char('y'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLY())
    ));
    assert!(matches!(
        key(KeyCode::Enter, KeyModifiers::NONE),
        Some(Event::KeyboardEnter())
    ));
}

#[test]
fn it_passes_plain_characters_to_the_input() -> Result<()> {
    match key(KeyCode::Char('t'), KeyModifiers::NONE) {
        Some(Event::KeyboardCharInput(input)) => {
            assert!(!input.ctrl);
        }
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_forwards_pasted_text() -> Result<()> {
    match EventsService::handle_crossterm(CrosstermEvent::Paste("hello".to_string())) {
        Some(Event::KeyboardPaste(text)) => assert_eq!(text, "hello"),
        _ => bail!("Wrong enum"),
    }

    return Ok(());
}

#[test]
fn it_ignores_focus_changes() {
    assert!(EventsService::handle_crossterm(CrosstermEvent::FocusGained).is_none());
}
