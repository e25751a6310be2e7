use crate::UserPayload;

use serde::Deserialize;

/// Token grant returned by the login endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserPayload,
}
