pub mod access_level;
pub mod identity_state;
pub mod role;
pub mod user_account;
