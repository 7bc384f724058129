#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::wrap_text;
use super::Author;
use super::Message;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    message: &'a Message,
    alignment: BubbleAlignment,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(
        message: &'a Message,
        alignment: BubbleAlignment,
        window_max_width: usize,
    ) -> Bubble<'a> {
        return Bubble {
            message,
            alignment,
            window_max_width,
        };
    }

    fn content_lines(&self, text_width: usize) -> Vec<(String, Style)> {
        let extraction = self.message.extract_draft();
        let mut lines = wrap_text(&extraction.display_text, text_width)
            .into_iter()
            .map(|line| return (line, Style::default()))
            .collect::<Vec<(String, Style)>>();

        if let Some(draft) = extraction.draft {
            let draft_style = Style {
                fg: Some(Color::Cyan),
                ..Style::default()
            };

            lines.push((" ".to_string(), Style::default()));
            lines.push((
                "Draft email (CTRL+Y to copy)".to_string(),
                draft_style.add_modifier(Modifier::BOLD),
            ));
            for line in wrap_text(&format!("Subject: {}", draft.subject), text_width) {
                lines.push((line, draft_style));
            }
            lines.push((" ".to_string(), Style::default()));
            for line in wrap_text(&draft.body, text_width) {
                lines.push((line, draft_style));
            }
        }

        return lines;
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32 * 0.04).ceil()) as usize;

        // left border + left padding + (text, not counted) + right padding + right
        // border + scrollbar. And then minimum bubble padding.
        let line_border_width = 5 + min_bubble_padding_length;
        let text_width = self
            .window_max_width
            .saturating_sub(line_border_width)
            .max(1);

        let content_lines = self.content_lines(text_width);
        let username = self.message.author().to_string();
        let username_len = username.chars().count();

        let max_line_length = content_lines
            .iter()
            .map(|(line, _)| return line.chars().count())
            .chain([username_len])
            .max()
            .unwrap_or(0);

        let bubble_padding = " ".repeat(self.window_max_width.saturating_sub(max_line_length + 5));

        let mut lines: Vec<Line<'static>> = vec![];

        let inner_bar = "─".repeat(max_line_length + 2 - username_len);
        lines.push(self.pad(
            vec![
                self.border_span("╭".to_string()),
                Span::styled(username, self.border_style().add_modifier(Modifier::BOLD)),
                self.border_span(format!("{inner_bar}╮")),
            ],
            &bubble_padding,
        ));

        for (line, style) in content_lines {
            let fill = " ".repeat(max_line_length - line.chars().count());
            lines.push(self.pad(
                vec![
                    self.border_span("│ ".to_string()),
                    Span::styled(line, style),
                    self.border_span(format!("{fill} │")),
                ],
                &bubble_padding,
            ));
        }

        let bottom_bar = "─".repeat(max_line_length + 2);
        lines.push(self.pad(
            vec![self.border_span(format!("╰{bottom_bar}╯"))],
            &bubble_padding,
        ));

        return lines;
    }

    fn pad(&self, mut spans: Vec<Span<'static>>, bubble_padding: &str) -> Line<'static> {
        if self.alignment == BubbleAlignment::Left {
            spans.push(Span::from(bubble_padding.to_string()));
            return Line::from(spans);
        }

        let mut res = vec![Span::from(bubble_padding.to_string())];
        res.extend(spans);
        return Line::from(res);
    }

    fn border_style(&self) -> Style {
        if self.message.author() == Author::User {
            return Style {
                fg: Some(Color::Blue),
                ..Style::default()
            };
        }

        return Style::default();
    }

    fn border_span(&self, text: String) -> Span<'static> {
        return Span::styled(text, self.border_style());
    }
}
