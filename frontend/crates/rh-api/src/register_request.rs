use serde::Serialize;

/// Payload for creating an account
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub is_employer: bool,
}
