//! Record domain model and request bodies.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Default length of list previews.
pub const PREVIEW_MAX_CHARS: usize = 100;

/// One question/answer pair as stored by the remote service.
///
/// `id` is assigned by the service and never changes. Two records are the
/// same record when their ids match, whatever their text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl QaRecord {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl PartialEq for QaRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for QaRecord {}

impl Hash for QaRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateQaRecord {
    pub question: String,
    pub answer: String,
}

/// Body of an update request; `id` selects the record to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQaRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl CreateQaRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> UpdateQaRecord {
        UpdateQaRecord {
            id: id.into(),
            question: self.question,
            answer: self.answer,
        }
    }
}

/// Decodes a list response.
///
/// Anything but a JSON array of records yields an empty list: a webhook that
/// answers `{}` or `null` for an empty knowledge base is not an error.
pub fn records_from_value(value: serde_json::Value) -> Vec<QaRecord> {
    if !value.is_array() {
        return Vec::new();
    }
    serde_json::from_value(value).unwrap_or_default()
}

/// Cuts `text` to `max_chars` characters, appending `...` when shortened.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
