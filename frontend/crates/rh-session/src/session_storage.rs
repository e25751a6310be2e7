use crate::Result as SessionResult;

/// String key-value storage the session persists through.
///
/// Mirrors the storage surface browser hosts expose: values are plain
/// strings, a missing key reads as `None`, and removing an absent key
/// succeeds.
pub trait SessionStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()>;

    fn remove(&mut self, key: &str) -> SessionResult<()>;
}
