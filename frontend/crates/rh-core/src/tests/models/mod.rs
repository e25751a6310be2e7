mod access_level;
mod identity_state;
mod user_account;
