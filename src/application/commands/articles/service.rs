// src/application/commands/articles/service.rs
use std::fmt::Write as _;
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleDraft, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
        }
    }

    /// Runs the full validation pass over a draft and aggregates every
    /// violation into one error, so the caller sees the whole set at once
    /// instead of just the first failing field.
    pub(super) fn validate_draft(draft: &ArticleDraft) -> ApplicationResult<()> {
        let violations = draft.validate();
        if violations.is_empty() {
            return Ok(());
        }

        let mut message = String::from(
            "The JSON sent contains invalid data. Here are the errors you need to correct: ",
        );
        for violation in &violations {
            let _ = write!(message, "Field {}: {} ", violation.field, violation.message);
        }

        Err(ApplicationError::validation(message))
    }
}
