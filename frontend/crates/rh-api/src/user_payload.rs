use rh_core::UserAccount;

use serde::Deserialize;

/// User record as the API serializes it.
///
/// The wire format is snake_case while the persisted identity record is
/// camelCase, so this type converts on the way in rather than letting two
/// serialization conventions leak into `UserAccount`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_employer: bool,
    pub is_admin: bool,
    pub is_active: bool,
}

impl From<UserPayload> for UserAccount {
    fn from(payload: UserPayload) -> Self {
        UserAccount {
            id: payload.id,
            email: payload.email,
            full_name: payload.full_name,
            is_employer: payload.is_employer,
            is_admin: payload.is_admin,
            is_active: payload.is_active,
        }
    }
}
