#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Author;
use super::DraftExtraction;

/// One entry in the chat transcript. Turns are never edited after they are
/// appended to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    author: Author,
    text: String,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            author,
            text: text.to_string(),
        };
    }

    pub fn author(&self) -> Author {
        return self.author;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    /// Splits the reply into display text and an optional draft email. User
    /// turns are never scanned.
    pub fn extract_draft(&self) -> DraftExtraction {
        if self.author == Author::User {
            return DraftExtraction {
                display_text: self.text.to_string(),
                draft: None,
            };
        }

        return DraftExtraction::extract(&self.text);
    }
}

pub fn wrap_text(text: &str, line_max_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    let text = text.replace('\t', "  ");
    for full_line in text.split('\n') {
        if full_line.trim().is_empty() {
            lines.push(" ".to_string());
            continue;
        }

        let mut char_count = 0;
        let mut current_lines: Vec<&str> = vec![];

        for word in full_line.split(' ') {
            let word_len = word.chars().count();
            if word_len + char_count + 1 > line_max_width && !current_lines.is_empty() {
                lines.push(current_lines.join(" ").trim_end().to_string());
                current_lines = vec![word];
                char_count = word_len + 1;
            } else {
                current_lines.push(word);
                char_count += word_len + 1;
            }
        }
        if !current_lines.is_empty() {
            lines.push(current_lines.join(" ").trim_end().to_string());
        }
    }

    return lines;
}
