use crate::{IdentityState, Role, UserAccount};

fn admin_account() -> UserAccount {
    UserAccount {
        id: 1,
        email: "admin@example.com".to_string(),
        full_name: "Admin".to_string(),
        is_employer: false,
        is_admin: true,
        is_active: true,
    }
}

#[test]
fn test_identity_state_default_is_unknown() {
    assert_eq!(IdentityState::default(), IdentityState::Unknown);
}

#[test]
fn test_is_authenticated_only_when_present() {
    assert!(!IdentityState::Unknown.is_authenticated());
    assert!(!IdentityState::Anonymous.is_authenticated());
    assert!(IdentityState::Present(admin_account()).is_authenticated());
}

#[test]
fn test_user_and_role_accessors() {
    let present = IdentityState::Present(admin_account());

    assert_eq!(present.user().map(|u| u.id), Some(1));
    assert_eq!(present.role(), Some(Role::Admin));

    assert!(IdentityState::Anonymous.user().is_none());
    assert_eq!(IdentityState::Unknown.role(), None);
}
