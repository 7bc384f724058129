use std::fmt;

/// Text a user submitted to the assistant. Construction fails for empty or
/// whitespace-only input, so holders can always send it to a backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(text: &str) -> Option<Query> {
        if text.trim().is_empty() {
            return None;
        }

        return Some(Query(text.to_string()));
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
