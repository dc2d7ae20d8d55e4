//! Application layer for qadmin.
//!
//! Session lifecycle, the record cache and the failure policy tying them
//! together. `QaConsole` is the facade a presentation layer drives.

pub mod console;
pub mod records;
pub mod session;
pub mod telemetry;

pub use console::QaConsole;
pub use records::{RecordCollectionManager, RecordForm, Submission};
pub use session::{SessionController, SessionTicket};
