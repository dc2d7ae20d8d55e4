//! Create/edit form state.

use qadmin_core::record::{
    ANSWER_MAX_CHARS, CreateQaRecord, QUESTION_MAX_CHARS, QaRecord, UpdateQaRecord, ValidationError,
};

/// What a valid form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CreateQaRecord),
    Update(UpdateQaRecord),
}

/// The question/answer being edited.
///
/// `id` is set when editing an existing record and decides whether submitting
/// creates or updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
}

impl RecordForm {
    /// Empty form for a new record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from a fetched record.
    pub fn from_record(record: &QaRecord) -> Self {
        Self {
            id: Some(record.id.clone()),
            question: record.question.clone(),
            answer: record.answer.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// `(used, limit)` character counter for the question field.
    pub fn question_counter(&self) -> (usize, usize) {
        (self.question.chars().count(), QUESTION_MAX_CHARS)
    }

    /// `(used, limit)` character counter for the answer field.
    pub fn answer_counter(&self) -> (usize, usize) {
        (self.answer.chars().count(), ANSWER_MAX_CHARS)
    }

    /// Trims both fields and validates them.
    pub fn submission(&self) -> Result<Submission, ValidationError> {
        let data = CreateQaRecord::new(self.question.trim(), self.answer.trim());
        data.validate()?;

        Ok(match &self.id {
            Some(id) => Submission::Update(data.with_id(id.clone())),
            None => Submission::Create(data),
        })
    }
}
