use crate::{Role, UserAccount};

fn account(is_employer: bool, is_admin: bool) -> UserAccount {
    UserAccount {
        id: 42,
        email: "user@example.com".to_string(),
        full_name: "Test User".to_string(),
        is_employer,
        is_admin,
        is_active: true,
    }
}

#[test]
fn test_role_precedence_admin_first() {
    assert_eq!(account(false, false).role(), Role::Candidate);
    assert_eq!(account(true, false).role(), Role::Employer);
    assert_eq!(account(false, true).role(), Role::Admin);
    // Both flags set: admin wins
    assert_eq!(account(true, true).role(), Role::Admin);
}

#[test]
fn given_account_when_serialized_then_uses_camel_case_fields() {
    let json = serde_json::to_string(&account(true, false)).unwrap();

    assert!(json.contains("\"fullName\""));
    assert!(json.contains("\"isEmployer\""));
    assert!(json.contains("\"isAdmin\""));
    assert!(json.contains("\"isActive\""));
    assert!(!json.contains("full_name"));
}

#[test]
fn given_camel_case_record_when_deserialized_then_restores_all_fields() {
    let json = r#"{"id":7,"email":"boss@example.com","fullName":"Big Boss","isEmployer":true,"isAdmin":true,"isActive":false}"#;

    let user: UserAccount = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "boss@example.com");
    assert_eq!(user.full_name, "Big Boss");
    assert!(user.is_employer);
    assert!(user.is_admin);
    assert!(!user.is_active);
}

#[test]
fn given_record_with_missing_fields_when_deserialized_then_fails() {
    let json = r#"{"id":7,"email":"boss@example.com"}"#;

    assert!(serde_json::from_str::<UserAccount>(json).is_err());
}
