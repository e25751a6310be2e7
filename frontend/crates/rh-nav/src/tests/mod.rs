
use rh_core::{IdentityState, UserAccount};

pub(crate) fn account(is_employer: bool, is_admin: bool) -> UserAccount {
    UserAccount {
        id: 77,
        email: "person@example.com".to_string(),
        full_name: "Test Person".to_string(),
        is_employer,
        is_admin,
        is_active: true,
    }
}

pub(crate) fn candidate() -> IdentityState {
    IdentityState::Present(account(false, false))
}

pub(crate) fn employer() -> IdentityState {
    IdentityState::Present(account(true, false))
}

pub(crate) fn admin() -> IdentityState {
    IdentityState::Present(account(false, true))
}

pub(crate) fn admin_employer() -> IdentityState {
    IdentityState::Present(account(true, true))
}
