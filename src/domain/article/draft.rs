// src/domain/article/draft.rs

pub const TITLE_MAX_CHARS: usize = 255;

/// One field-level validation failure: a field path plus a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A candidate article payload as deserialized from a request body, before
/// any validation has run.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    /// Checks every declared field constraint and reports the complete set
    /// of violations in declaration order. Never stops at the first failure.
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.title.trim().is_empty() {
            violations.push(Violation::new("title", "must not be blank"));
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            violations.push(Violation::new(
                "title",
                format!("must be {TITLE_MAX_CHARS} characters or less"),
            ));
        }

        if self.content.trim().is_empty() {
            violations.push(Violation::new("content", "must not be blank"));
        }

        violations
    }
}
