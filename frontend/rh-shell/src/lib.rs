//! rh-shell library
//!
//! Exports the application shell for use in integration tests.

pub mod error;
pub mod logger;
pub mod shell;

pub use error::{Result, ShellError};
pub use shell::AppShell;
