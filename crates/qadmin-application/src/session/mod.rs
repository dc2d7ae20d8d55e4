//! Session application services.

mod controller;

pub use controller::{SessionController, SessionTicket};
