#[cfg(test)]
#[path = "draft_email_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Marker the assistant is instructed to emit when it proposes an email.
pub const DRAFT_MARKER_FORMAT: &str = "[DRAFT_EMAIL: Subject: <subject> | Body: <body>]";

// Subject may not contain `|`, `[` or `]`, body may not contain `[` or `]`. Both
// must start with a non-whitespace character so an empty field never matches.
static DRAFT_MARKER: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(
        r"\[DRAFT_EMAIL:\s*Subject:\s*([^|\[\]\s][^|\[\]]*?)\s*\|\s*Body:\s*([^\[\]\s][^\[\]]*?)\s*\]",
    )
    .unwrap();
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEmail {
    pub subject: String,
    pub body: String,
}

impl DraftEmail {
    pub fn new(subject: &str, body: &str) -> DraftEmail {
        return DraftEmail {
            subject: subject.trim().to_string(),
            body: body.trim().to_string(),
        };
    }

    pub fn format(&self) -> String {
        return format!("Subject: {}\n\n{}", self.subject, self.body);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftExtraction {
    pub display_text: String,
    pub draft: Option<DraftEmail>,
}

impl DraftExtraction {
    /// Separates an assistant reply from the draft email embedded in it. The
    /// first well-formed marker provides the draft, and every well-formed marker
    /// is stripped from the display text. Malformed markers are left untouched.
    pub fn extract(text: &str) -> DraftExtraction {
        let mut display_text = text.to_string();
        let mut draft: Option<DraftEmail> = None;

        // Stripping can splice two fragments into a new marker, so repeat until
        // nothing matches.
        loop {
            let (range, found) = match DRAFT_MARKER.captures(&display_text) {
                Some(captures) => {
                    let Some(whole) = captures.get(0) else {
                        break;
                    };
                    (whole.range(), DraftEmail::new(&captures[1], &captures[2]))
                }
                None => break,
            };

            if draft.is_none() {
                draft = Some(found);
            }
            display_text.replace_range(range, "");
        }

        return DraftExtraction {
            display_text,
            draft,
        };
    }
}
