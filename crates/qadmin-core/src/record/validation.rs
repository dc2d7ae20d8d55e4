//! Client-side checks applied before a record is submitted.

use super::{CreateQaRecord, UpdateQaRecord};
use thiserror::Error;

pub const QUESTION_MAX_CHARS: usize = 500;
pub const ANSWER_MAX_CHARS: usize = 5000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Both question and answer are required.")]
    MissingField,

    #[error("{field} is too long ({length}/{limit} characters)")]
    TooLong {
        field: &'static str,
        length: usize,
        limit: usize,
    },
}

impl CreateQaRecord {
    /// Checks emptiness and length ceilings. Lengths count characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.question, &self.answer)
    }
}

impl UpdateQaRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.question, &self.answer)
    }
}

fn validate_fields(question: &str, answer: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() || answer.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    check_length("Question", question, QUESTION_MAX_CHARS)?;
    check_length("Answer", answer, ANSWER_MAX_CHARS)
}

fn check_length(field: &'static str, value: &str, limit: usize) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length > limit {
        return Err(ValidationError::TooLong {
            field,
            length,
            limit,
        });
    }
    Ok(())
}
