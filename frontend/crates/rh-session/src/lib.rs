pub mod error;
pub mod file_storage;
pub mod memory_storage;
pub mod session_storage;
pub mod session_store;

pub use error::{Result, SessionError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use session_storage::SessionStorage;
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
