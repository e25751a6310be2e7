//! Platform user record - the identity the session persists between runs.

use crate::Role;

use serde::{Deserialize, Serialize};

/// A signed-in user as the backend reports it.
/// `is_admin` and `is_employer` are independent flags; neither excludes
/// the other.
///
/// Serialized with camelCase field names, the record format the session
/// storage holds under the "user" key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_employer: bool,
    pub is_admin: bool,
    pub is_active: bool,
}

impl UserAccount {
    /// Effective role, admin taking precedence over employer.
    pub fn role(&self) -> Role {
        if self.is_admin {
            Role::Admin
        } else if self.is_employer {
            Role::Employer
        } else {
            Role::Candidate
        }
    }
}
