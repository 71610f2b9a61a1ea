//! Domain layer for the AgriSmart client.
//!
//! Pure types only: the error taxonomy, the session model and its
//! persistence trait, the form field map with its submit state machine, the
//! route table, and the soil advisor rules. No I/O, no network.

pub mod advisor;
pub mod error;
pub mod form;
pub mod route;
pub mod session;

// Re-export common error type
pub use error::{AgriError, Result};
