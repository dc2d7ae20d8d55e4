//! Record application services.
//!
//! This module contains the record cache manager and the create/edit form
//! used in front of it.

mod form;
mod manager;

pub use form::{RecordForm, Submission};
pub use manager::RecordCollectionManager;
