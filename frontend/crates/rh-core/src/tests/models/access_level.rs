use crate::AccessLevel;

use std::str::FromStr;

#[test]
fn test_access_level_as_str() {
    assert_eq!(AccessLevel::Public.as_str(), "public");
    assert_eq!(AccessLevel::Authenticated.as_str(), "authenticated");
    assert_eq!(AccessLevel::Employer.as_str(), "employer");
    assert_eq!(AccessLevel::Admin.as_str(), "admin");
}

#[test]
fn test_access_level_from_str() {
    assert_eq!(
        AccessLevel::from_str("public").unwrap(),
        AccessLevel::Public
    );
    assert_eq!(
        AccessLevel::from_str("authenticated").unwrap(),
        AccessLevel::Authenticated
    );
    assert_eq!(
        AccessLevel::from_str("employer").unwrap(),
        AccessLevel::Employer
    );
    assert_eq!(AccessLevel::from_str("admin").unwrap(), AccessLevel::Admin);
    assert!(AccessLevel::from_str("superuser").is_err());
}

#[test]
fn test_access_level_display() {
    assert_eq!(AccessLevel::Employer.to_string(), "employer");
    assert_eq!(AccessLevel::Admin.to_string(), "admin");
}
