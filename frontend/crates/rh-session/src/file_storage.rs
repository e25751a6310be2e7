use crate::error::{Result as SessionResult, SessionError};
use crate::session_storage::SessionStorage;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// File-backed session storage, one file per key.
///
/// Writes are atomic: the value lands in a temp file that is fsynced and
/// renamed over the final path, so a crash mid-write never leaves a torn
/// record behind.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> SessionResult<Self> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|e| SessionError::dir_creation(dir.clone(), e))?;

        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| SessionError::file_read(path, e))?;

        Ok(Some(contents))
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        let final_path = self.key_path(key);
        let temp_path = self.dir.join(format!("{key}.tmp.{}", std::process::id()));

        // Write to temp file with explicit sync
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path, e)
        })?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        let path = self.key_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path, e)),
        }
    }
}
