#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Bubble;
use crate::domain::models::BubbleAlignment;
use crate::domain::models::Message;

/// Rendered chat bubbles keyed by transcript index. Turns never change once
/// appended, so an entry is only rebuilt when the width changes.
#[derive(Default)]
pub struct BubbleList {
    cache: HashMap<usize, Vec<Line<'static>>>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn new() -> BubbleList {
        return BubbleList::default();
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }
        self.cache.retain(|idx, _| return *idx < messages.len());

        for (idx, message) in messages.iter().enumerate() {
            if self.cache.contains_key(&idx) {
                continue;
            }

            let mut align = BubbleAlignment::Left;
            if message.author() == Author::User {
                align = BubbleAlignment::Right;
            }

            self.cache
                .insert(idx, Bubble::new(message, align, line_width).as_lines());
        }

        self.lines_len = self.cache.values().map(|lines| return lines.len()).sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();

        return indexes
            .iter()
            .filter_map(|idx| return self.cache.get(idx))
            .flat_map(|lines| return lines.to_owned())
            .collect();
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines())
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
