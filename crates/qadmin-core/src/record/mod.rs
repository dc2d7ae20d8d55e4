//! Q&A record domain module.
//!
//! # Module Structure
//!
//! - `model`: record types and wire bodies
//! - `validation`: client-side length/emptiness rules
//! - `search`: the case-insensitive filter over a record list

mod model;
mod search;
mod validation;

pub use model::{CreateQaRecord, PREVIEW_MAX_CHARS, QaRecord, UpdateQaRecord, preview, records_from_value};
pub use search::filtered_view;
pub use validation::{ANSWER_MAX_CHARS, QUESTION_MAX_CHARS, ValidationError};
