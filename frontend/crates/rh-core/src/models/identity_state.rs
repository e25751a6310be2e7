use crate::{Role, UserAccount};

/// Session identity as the client currently knows it.
///
/// `Unknown` is the startup window before the persisted session has been
/// read. It is distinct from `Anonymous`: guards hold their decision
/// against it instead of redirecting, so a reload never flashes through
/// the login view while restore is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdentityState {
    /// Restore has not resolved yet
    #[default]
    Unknown,
    /// No session
    Anonymous,
    /// Signed in
    Present(UserAccount),
}

impl IdentityState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn user(&self) -> Option<&UserAccount> {
        match self {
            Self::Present(user) => Some(user),
            _ => None,
        }
    }

    /// Effective role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user().map(UserAccount::role)
    }
}
