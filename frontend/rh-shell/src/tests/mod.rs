
use rh_config::Config;
use rh_core::UserAccount;

use std::path::Path;

use tempfile::TempDir;

/// Config whose session storage lives in a fresh temp directory
pub(crate) fn test_config() -> (TempDir, Config) {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.session.storage_dir = Some(temp.path().to_str().unwrap().to_string());
    (temp, config)
}

/// Seed the storage directory with a signed-in session
pub(crate) fn seed_session(dir: &Path, account: &UserAccount, token: &str) {
    std::fs::write(dir.join("token"), token).unwrap();
    std::fs::write(dir.join("user"), serde_json::to_string(account).unwrap()).unwrap();
}

pub(crate) fn account(is_employer: bool, is_admin: bool) -> UserAccount {
    UserAccount {
        id: 7,
        email: String::from("dana@example.com"),
        full_name: String::from("Dana Hale"),
        is_employer,
        is_admin,
        is_active: true,
    }
}
